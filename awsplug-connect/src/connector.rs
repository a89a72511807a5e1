//! The low-level connector seam.

use crate::error::ConnectResult;
use crate::params::ConnectionParameters;
use std::future::Future;

/// Establishes the actual connection from a set of named parameters.
///
/// Implementations receive the caller's parameters exactly as built and
/// report failures through the closed [`ConnectError`](crate::ConnectError)
/// taxonomy.
pub trait Connector {
    /// The connection produced on success.
    type Connection;

    fn connect(
        &self,
        params: ConnectionParameters,
    ) -> impl Future<Output = ConnectResult<Self::Connection>> + Send;
}
