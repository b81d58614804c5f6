//! Thread and message endpoints.
//!
//! Threads and messages are conversational entities owned and persisted by
//! the daemon; this binding only moves their payloads.

use super::CortexClient;
use crate::Result;
use reqwest::Method;
use serde_json::{json, Value};

impl CortexClient {
    /// List threads. `GET /v1/threads`, returning the `data` field of the
    /// response, or an empty list when absent.
    pub async fn threads(&self) -> Result<Vec<Value>> {
        self.transport.data_list("/v1/threads").await
    }

    /// Create a thread with the given title.
    ///
    /// `POST /v1/threads` with `{"metadata": {"title": ..}}`.
    pub async fn create_thread(&self, title: &str) -> Result<Value> {
        self.transport
            .json(
                Method::POST,
                "/v1/threads",
                Some(&json!({ "metadata": { "title": title } })),
            )
            .await
    }

    /// Fetch a thread. `GET /v1/threads/{thread_id}`.
    pub async fn thread(&self, thread_id: &str) -> Result<Value> {
        self.transport
            .json(Method::GET, &format!("/v1/threads/{thread_id}"), None)
            .await
    }

    /// Delete a thread. `DELETE /v1/threads/{thread_id}`.
    pub async fn delete_thread(&self, thread_id: &str) -> Result<Value> {
        self.transport
            .json(Method::DELETE, &format!("/v1/threads/{thread_id}"), None)
            .await
    }

    /// Replace a thread's metadata. `PUT /v1/threads/{thread_id}`.
    ///
    /// The daemon answers this endpoint with plain text, which is returned
    /// as-is.
    pub async fn update_thread_metadata(
        &self,
        thread_id: &str,
        request: &Value,
    ) -> Result<String> {
        self.transport
            .text(Method::PUT, &format!("/v1/threads/{thread_id}"), Some(request))
            .await
    }

    /// List messages in a thread, with daemon-defined query parameters such
    /// as `limit`, `order`, `after`, `before`.
    ///
    /// `GET /v1/threads/{thread_id}/messages`.
    pub async fn messages(&self, thread_id: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.transport
            .json_with_query(&format!("/v1/threads/{thread_id}/messages"), params)
            .await
    }

    /// Append a message to a thread. `POST /v1/threads/{thread_id}/messages`.
    pub async fn create_message(&self, thread_id: &str, content: &Value) -> Result<Value> {
        self.transport
            .json(
                Method::POST,
                &format!("/v1/threads/{thread_id}/messages"),
                Some(content),
            )
            .await
    }

    /// Fetch a message. `GET /v1/threads/{thread_id}/messages/{message_id}`.
    pub async fn message(&self, thread_id: &str, message_id: &str) -> Result<Value> {
        self.transport
            .json(
                Method::GET,
                &format!("/v1/threads/{thread_id}/messages/{message_id}"),
                None,
            )
            .await
    }

    /// Delete a message. `DELETE /v1/threads/{thread_id}/messages/{message_id}`.
    pub async fn delete_message(&self, thread_id: &str, message_id: &str) -> Result<Value> {
        self.transport
            .json(
                Method::DELETE,
                &format!("/v1/threads/{thread_id}/messages/{message_id}"),
                None,
            )
            .await
    }

    /// Patch a message's metadata.
    ///
    /// `PATCH /v1/threads/{thread_id}/messages/{message_id}` with
    /// `{"metadata": ..}`.
    pub async fn update_message_metadata(
        &self,
        thread_id: &str,
        message_id: &str,
        metadata: &Value,
    ) -> Result<Value> {
        self.transport
            .json(
                Method::PATCH,
                &format!("/v1/threads/{thread_id}/messages/{message_id}"),
                Some(&json!({ "metadata": metadata })),
            )
            .await
    }
}
