//! Shared test doubles for the connection factory.

use awsplug_connect::{AwsPlugin, ConnectResult, ConnectionParameters, Connector};
use std::sync::Mutex;

/// Connector that records every parameter set it receives and replays a
/// scripted outcome.
pub struct RecordingConnector<T> {
    outcome: ConnectResult<T>,
    calls: Mutex<Vec<ConnectionParameters>>,
}

impl<T: Clone + Send + Sync> RecordingConnector<T> {
    pub fn returning(outcome: ConnectResult<T>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ConnectionParameters> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> ConnectionParameters {
        self.calls().pop().expect("connector was never called")
    }
}

impl<T: Clone + Send + Sync> Connector for RecordingConnector<T> {
    type Connection = T;

    async fn connect(&self, params: ConnectionParameters) -> ConnectResult<T> {
        self.calls.lock().unwrap().push(params);
        self.outcome.clone()
    }
}

/// Abort value produced by [`RecordingPlugin::fail`].
#[derive(Debug, PartialEq, Eq)]
pub struct FailAbort(pub String);

/// Plugin that records every failure message it is given.
pub struct RecordingPlugin {
    name: Option<String>,
    failures: Mutex<Vec<String>>,
}

impl RecordingPlugin {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            failures: Mutex::new(Vec::new()),
        }
    }

    pub fn nameless() -> Self {
        Self {
            name: None,
            failures: Mutex::new(Vec::new()),
        }
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl AwsPlugin for RecordingPlugin {
    type Failure = FailAbort;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn fail(&self, message: String) -> FailAbort {
        self.failures.lock().unwrap().push(message.clone());
        FailAbort(message)
    }
}
