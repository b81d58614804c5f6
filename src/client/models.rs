//! Model lifecycle endpoints: listing, start/stop, pulls, sources.
//!
//! Model descriptors and pull/import requests are daemon-defined payloads and
//! are carried as opaque JSON.

use super::CortexClient;
use crate::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

impl CortexClient {
    /// List models registered with the daemon.
    ///
    /// `GET /v1/models`, returning the `data` field of the response, or an
    /// empty list when absent.
    pub async fn models(&self) -> Result<Vec<Value>> {
        self.transport.data_list("/v1/models").await
    }

    /// Load a model into memory. `POST /v1/models/start`.
    pub async fn start_model(&self, request: &Value) -> Result<(StatusCode, String)> {
        self.transport
            .status_and_text(Method::POST, "/v1/models/start", Some(request))
            .await
    }

    /// Unload a running model. `POST /v1/models/stop` with `{"model": ..}`.
    pub async fn stop_model(&self, model: &str) -> Result<(StatusCode, String)> {
        self.transport
            .status_and_text(Method::POST, "/v1/models/stop", Some(&json!({ "model": model })))
            .await
    }

    /// Fetch a model descriptor. `GET /v1/models/{model}`.
    pub async fn model(&self, model: &str) -> Result<Value> {
        self.transport
            .json(Method::GET, &format!("/v1/models/{model}"), None)
            .await
    }

    /// Remove a model from the daemon. `DELETE /v1/models/{model}`.
    pub async fn delete_model(&self, model: &str) -> Result<Value> {
        self.transport
            .json(Method::DELETE, &format!("/v1/models/{model}"), None)
            .await
    }

    /// Patch a model descriptor. `PATCH /v1/models/{model}`.
    pub async fn update_model(&self, model: &str, request: &Value) -> Result<Value> {
        self.transport
            .json(Method::PATCH, &format!("/v1/models/{model}"), Some(request))
            .await
    }

    /// Register a remotely hosted model. `POST /v1/models/add`.
    pub async fn add_remote_model(&self, request: &Value) -> Result<Value> {
        self.transport
            .json(Method::POST, "/v1/models/add", Some(request))
            .await
    }

    /// Import a model from a local path. `POST /v1/models/import`.
    pub async fn import_model(&self, request: &Value) -> Result<Value> {
        self.transport
            .json(Method::POST, "/v1/models/import", Some(request))
            .await
    }

    /// Start downloading a model. `POST /v1/models/pull`.
    ///
    /// The download runs inside the daemon; the response carries the task id
    /// accepted by [`abort_model_pull`](Self::abort_model_pull).
    pub async fn pull_model(&self, request: &Value) -> Result<Value> {
        self.transport
            .json(Method::POST, "/v1/models/pull", Some(request))
            .await
    }

    /// Abort an in-flight model download.
    ///
    /// `DELETE /v1/models/pull` with `{"taskId": ..}` in the body.
    pub async fn abort_model_pull(&self, task_id: &str) -> Result<Value> {
        self.transport
            .json(
                Method::DELETE,
                "/v1/models/pull",
                Some(&json!({ "taskId": task_id })),
            )
            .await
    }

    /// Register a model source. `POST /v1/models/sources` with
    /// `{"source": ..}`.
    pub async fn add_model_source(&self, source: &str) -> Result<Value> {
        self.transport
            .json(
                Method::POST,
                "/v1/models/sources",
                Some(&json!({ "source": source })),
            )
            .await
    }

    /// Remove a model source. `DELETE /v1/models/sources`.
    pub async fn remove_model_source(&self, request: &Value) -> Result<Value> {
        self.transport
            .json(Method::DELETE, "/v1/models/sources", Some(request))
            .await
    }
}
