//! Health and process-manager endpoints.

use super::CortexClient;
use crate::Result;
use reqwest::{Method, StatusCode};

impl CortexClient {
    /// Probe `GET /healthz` and return the HTTP status code.
    ///
    /// The daemon answers 200 when ready; any other status (or a transport
    /// error, if it is not running at all) means it is not.
    pub async fn server_health(&self) -> Result<StatusCode> {
        self.transport.status(Method::GET, "/healthz").await
    }

    /// Ask the process manager to shut the daemon down.
    ///
    /// `DELETE /processManager/destroy`, returning the status code.
    pub async fn terminate_server(&self) -> Result<StatusCode> {
        self.transport
            .status(Method::DELETE, "/processManager/destroy")
            .await
    }
}
