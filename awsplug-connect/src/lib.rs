//! AWS connection helper for plugins.
//!
//! Provides:
//! - A connection factory that runs a low-level connector on behalf of a
//!   plugin and reports failures through the plugin's own abort path
//! - A closed taxonomy of connection failures with operator-facing messages
//! - An AWS SDK backed connector (S3, STS) with shared profile checks

pub mod config;
pub mod connector;
pub mod error;
pub mod factory;
pub mod params;
pub mod plugin;
pub mod profile;
pub mod sdk;

pub use config::ConnectConfig;
pub use connector::Connector;
pub use error::{ConnectError, ConnectResult};
pub use factory::{ConnectionFactory, failure_message};
pub use params::ConnectionParameters;
pub use plugin::{AwsPlugin, NamedPlugin, PluginFailure};
pub use sdk::{AwsConnection, SdkConnector, ServiceClient};
