//! Connection factory: runs a connector on behalf of a plugin and turns
//! any connection failure into the plugin's own failure report.

use crate::connector::Connector;
use crate::error::ConnectError;
use crate::params::ConnectionParameters;
use crate::plugin::AwsPlugin;

const REGION_REQUIRED_FALLBACK: &str = "A region is required and none was found";

/// Builds the operator-facing message for a connection failure.
pub fn failure_message(plugin_name: Option<&str>, err: &ConnectError) -> String {
    match err {
        err if !err.is_sdk_error() => format!("Couldn't connect to AWS: {err}"),
        ConnectError::NoRegion => match plugin_name {
            Some(name) => format!("The {name} plugin requires a region"),
            None => REGION_REQUIRED_FALLBACK.to_string(),
        },
        _ => err.to_string(),
    }
}

/// Stateless adapter between plugin code and a low-level connector.
pub struct ConnectionFactory<C> {
    connector: C,
}

impl<C: Connector> ConnectionFactory<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Connects with `params`, forwarded to the connector untouched.
    ///
    /// On success the connector's value is returned as is. On failure the
    /// plugin's `fail` is called exactly once and its abort value is
    /// returned as `Err`.
    pub async fn connect<P: AwsPlugin>(
        &self,
        plugin: &P,
        params: ConnectionParameters,
    ) -> Result<C::Connection, P::Failure> {
        match self.connector.connect(params).await {
            Ok(connection) => Ok(connection),
            Err(err) => Err(plugin.fail(failure_message(plugin.name(), &err))),
        }
    }
}
