//! Client handle and endpoint bindings for the Cortex daemon.

mod builder;
mod configs;
mod engines;
mod files;
mod hardware;
mod inference;
mod models;
mod system;
mod threads;

pub use builder::CortexClientBuilder;

use crate::transport::HttpTransport;
use crate::Result;

/// Client handle for a running Cortex daemon.
///
/// Holds the daemon's base URL and a pooled HTTP connection reused across
/// calls. Cloning is cheap and clones share the pool, so a single handle can
/// serve concurrent tasks.
///
/// The handle does not manage the daemon process itself; callers start and
/// stop the daemon out of band (see [`CortexClientBuilder`]).
#[derive(Clone, Debug)]
pub struct CortexClient {
    pub(crate) transport: HttpTransport,
}

impl CortexClient {
    /// Connect to the default daemon address, `http://127.0.0.1:39281`.
    pub fn new() -> Result<Self> {
        CortexClientBuilder::new().build()
    }

    pub fn builder() -> CortexClientBuilder {
        CortexClientBuilder::new()
    }

    /// The base URL requests are issued against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}
