//! Configuration for the SDK-backed connector.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for [`SdkConnector`](crate::sdk::SdkConnector).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Region used when the caller passes none. When both are absent the
    /// SDK's own region chain (environment, profile) decides.
    pub default_region: Option<String>,

    /// Endpoint used when the caller passes none (e.g. a LocalStack or
    /// MinIO URL in testing).
    pub endpoint_override: Option<String>,

    /// Shared config file. `None` means `AWS_CONFIG_FILE` or `~/.aws/config`.
    pub config_file: Option<PathBuf>,

    /// Shared credentials file. `None` means `AWS_SHARED_CREDENTIALS_FILE`
    /// or `~/.aws/credentials`.
    pub credentials_file: Option<PathBuf>,

    /// Resolve credentials while connecting instead of on first request.
    pub eager_credentials: bool,

    /// App name sent in the SDK user agent.
    pub app_name: Option<String>,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            default_region: None,
            endpoint_override: None,
            config_file: None,
            credentials_file: None,
            eager_credentials: true,
            app_name: None,
        }
    }
}

impl ConnectConfig {
    /// Creates a config for testing against a local S3-compatible endpoint.
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            default_region: Some("us-east-1".to_string()),
            endpoint_override: Some("http://localhost:9000".to_string()),
            config_file: None,
            credentials_file: None,
            eager_credentials: false,
            app_name: Some("awsplug-test".to_string()),
        }
    }
}
