//! The plugin capability the connection factory reports failures through.

use thiserror::Error;

/// A plugin that asks for AWS connections.
///
/// `fail` is the plugin's abort path. Its return value is the abort itself:
/// the factory hands it straight back to the caller as `Err` and does no
/// further work once `fail` has been called.
pub trait AwsPlugin {
    /// Value that aborts the calling operation.
    type Failure;

    /// The plugin's display name, if it has one.
    ///
    /// `None` (no name at all) is distinct from `Some("")`.
    fn name(&self) -> Option<&str>;

    /// Reports `message` to the operator and produces the abort value.
    fn fail(&self, message: String) -> Self::Failure;
}

/// Abort value for plugins that carry nothing but the message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PluginFailure {
    pub plugin: Option<String>,
    pub message: String,
}

/// A plain plugin identity whose `fail` yields a [`PluginFailure`].
#[derive(Clone, Debug, Default)]
pub struct NamedPlugin {
    name: Option<String>,
}

impl NamedPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// A plugin with no name.
    pub fn anonymous() -> Self {
        Self { name: None }
    }
}

impl AwsPlugin for NamedPlugin {
    type Failure = PluginFailure;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn fail(&self, message: String) -> PluginFailure {
        PluginFailure {
            plugin: self.name.clone(),
            message,
        }
    }
}
