//! Hardware inspection and GPU activation endpoints.

use super::CortexClient;
use crate::Result;
use reqwest::Method;
use serde_json::Value;

impl CortexClient {
    /// Fetch the daemon's hardware report (CPU, GPUs, RAM, OS).
    ///
    /// `GET /v1/hardware`.
    pub async fn hardware(&self) -> Result<Value> {
        self.transport.json(Method::GET, "/v1/hardware", None).await
    }

    /// Select which GPUs the daemon should use. `POST /v1/hardware/activate`.
    pub async fn activate_gpus(&self, request: &Value) -> Result<Value> {
        self.transport
            .json(Method::POST, "/v1/hardware/activate", Some(request))
            .await
    }
}
