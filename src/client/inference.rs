//! Inference endpoints: embeddings and chat completions.

use super::CortexClient;
use crate::Result;
use reqwest::Method;
use serde_json::Value;

impl CortexClient {
    /// Generate embeddings. `POST /embeddings`.
    ///
    /// Note the daemon serves this endpoint without the `/v1` prefix.
    pub async fn create_embedding(&self, request: &Value) -> Result<Value> {
        self.transport
            .json(Method::POST, "/embeddings", Some(request))
            .await
    }

    /// Run a chat completion. `POST /v1/chat/completions`.
    ///
    /// The request is the OpenAI-compatible payload the daemon documents;
    /// streaming variants are not exposed by this binding.
    pub async fn create_chat_completion(&self, request: &Value) -> Result<Value> {
        self.transport
            .json(Method::POST, "/v1/chat/completions", Some(request))
            .await
    }
}
