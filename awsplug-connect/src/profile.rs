//! Shared AWS config and credentials file inspection.
//!
//! Answers which profile is active and whether it exists. Credential and
//! region resolution from these files is left to the SDK.

use crate::config::ConnectConfig;
use crate::error::{ConnectError, ConnectResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which shared file a section list was read from. The two files name
/// their sections differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `[default]` and `[profile name]` sections.
    Config,
    /// `[name]` sections.
    Credentials,
}

/// Locations of the shared config and credentials files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedFiles {
    pub config: Option<PathBuf>,
    pub credentials: Option<PathBuf>,
}

impl SharedFiles {
    /// Resolves file locations: explicit config, then the standard
    /// environment variables, then the files under `~/.aws`.
    pub fn resolve(config: &ConnectConfig) -> Self {
        Self {
            config: config
                .config_file
                .clone()
                .or_else(|| default_location("AWS_CONFIG_FILE", "config")),
            credentials: config
                .credentials_file
                .clone()
                .or_else(|| default_location("AWS_SHARED_CREDENTIALS_FILE", "credentials")),
        }
    }

    /// Returns true if either file defines `profile`.
    ///
    /// A missing file counts as empty. A file that exists but cannot be
    /// read or parsed is a `ConfigParse` error.
    pub async fn has_profile(&self, profile: &str) -> ConnectResult<bool> {
        for (path, kind) in [
            (&self.config, FileKind::Config),
            (&self.credentials, FileKind::Credentials),
        ] {
            let Some(path) = path else { continue };
            if read_profiles(path, kind).await?.iter().any(|p| p == profile) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Fails with `ProfileNotFound` unless `profile` is defined.
    pub async fn require_profile(&self, profile: &str) -> ConnectResult<()> {
        if self.has_profile(profile).await? {
            Ok(())
        } else {
            Err(ConnectError::ProfileNotFound {
                profile: profile.to_string(),
            })
        }
    }
}

/// The profile a connection will use: the explicit one, else `AWS_PROFILE`.
///
/// `None` means the SDK's implicit default profile, which need not exist.
pub fn active_profile(explicit: Option<&str>) -> Option<String> {
    explicit.map(str::to_string).or_else(|| {
        std::env::var("AWS_PROFILE")
            .ok()
            .filter(|profile| !profile.is_empty())
    })
}

fn default_location(env_var: &str, file_name: &str) -> Option<PathBuf> {
    match std::env::var_os(env_var) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => dirs::home_dir().map(|home| home.join(".aws").join(file_name)),
    }
}

async fn read_profiles(path: &Path, kind: FileKind) -> ConnectResult<Vec<String>> {
    let parse_error = || ConnectError::ConfigParse {
        path: path.display().to_string(),
    };

    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("shared file {} not present", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            debug!("failed to read shared file {}: {e}", path.display());
            return Err(parse_error());
        }
    };

    parse_profiles(&text, kind).map_err(|line| {
        debug!("{}:{line}: malformed line", path.display());
        parse_error()
    })
}

/// Extracts the profile names defined in a shared file.
///
/// On a malformed line, returns its 1-based line number.
pub fn parse_profiles(text: &str, kind: FileKind) -> Result<Vec<String>, usize> {
    let mut profiles = Vec::new();
    let mut in_section = false;
    let mut has_property = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) else {
                return Err(line_no);
            };
            let header = header.trim();
            if header.is_empty() {
                return Err(line_no);
            }
            if let Some(name) = profile_name(header, kind) {
                profiles.push(name.to_string());
            }
            in_section = true;
            has_property = false;
            continue;
        }

        if !in_section {
            return Err(line_no);
        }

        // Indented lines continue the previous property's value.
        if raw.starts_with(char::is_whitespace) && has_property {
            continue;
        }

        match line.split_once('=') {
            Some((key, _)) if !key.trim().is_empty() => has_property = true,
            _ => return Err(line_no),
        }
    }

    Ok(profiles)
}

fn profile_name(header: &str, kind: FileKind) -> Option<&str> {
    match kind {
        FileKind::Credentials => Some(header),
        FileKind::Config if header == "default" => Some(header),
        FileKind::Config => header
            .strip_prefix("profile")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map(str::trim),
    }
}
