//! Parameters forwarded to a low-level connector.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Named connection parameters.
///
/// The default value has every optional field absent and no extras, which
/// is what a bare `connect(plugin)` forwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionParameters {
    pub conn_type: Option<String>,
    pub resource: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    /// Additional named parameters, forwarded verbatim.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ConnectionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conn_type(mut self, conn_type: impl Into<String>) -> Self {
        self.conn_type = Some(conn_type.into());
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Adds (or replaces) an extra named parameter.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Shorthand for a `client` connection to `service`.
    pub fn client(service: impl Into<String>) -> Self {
        Self::new().conn_type("client").resource(service)
    }
}
