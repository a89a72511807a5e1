//! Connection failure taxonomy.
//!
//! Each variant's `Display` text matches what the provider SDK reports for
//! the same condition, so it can be shown to the operator verbatim.

use thiserror::Error;

/// Result type for low-level connection attempts.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Failures a low-level connector can report.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConnectError {
    /// Not an SDK failure: bad input from the calling code.
    #[error("{0}")]
    Invalid(String),

    #[error("The config profile ({profile}) could not be found")]
    ProfileNotFound { profile: String },

    #[error("Partial credentials found in {provider}, missing: {cred_var}")]
    PartialCredentials { provider: String, cred_var: String },

    #[error("Unable to locate credentials")]
    NoCredentials,

    #[error("Unable to parse config file: {path}")]
    ConfigParse { path: String },

    #[error("You must specify a region.")]
    NoRegion,

    #[error("Unknown service: '{service_name}'. Valid service names are: {}", .known_service_names.join(", "))]
    UnknownService {
        service_name: String,
        known_service_names: Vec<String>,
    },

    /// Any other SDK failure.
    #[error("{0}")]
    Sdk(String),
}

impl ConnectError {
    /// The bare SDK base error, with no further detail.
    pub fn unspecified() -> Self {
        Self::Sdk("An unspecified error occurred".to_string())
    }

    /// Returns true for failures raised by the provider SDK rather than
    /// by the calling code.
    pub fn is_sdk_error(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}
