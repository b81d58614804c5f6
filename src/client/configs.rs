//! Daemon configuration endpoints.

use super::CortexClient;
use crate::Result;
use reqwest::{Method, StatusCode};
use serde_json::Value;

impl CortexClient {
    /// Fetch the daemon configuration. `GET /v1/configs`.
    pub async fn configuration(&self) -> Result<Value> {
        self.transport.json(Method::GET, "/v1/configs", None).await
    }

    /// Update the daemon configuration. `POST /v1/configs`.
    ///
    /// Returns the status code and raw body text unmodified; the daemon
    /// reports partial-update outcomes through them.
    pub async fn update_configuration(&self, config: &Value) -> Result<(StatusCode, String)> {
        self.transport
            .status_and_text(Method::POST, "/v1/configs", Some(config))
            .await
    }
}
