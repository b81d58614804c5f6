//! File storage endpoints.
//!
//! The two methods with local side effects live here: uploading reads a file
//! from disk, and downloading writes the raw response body to disk.

use super::CortexClient;
use crate::Result;
use reqwest::Method;
use serde_json::Value;
use std::path::Path;

impl CortexClient {
    /// List stored files. `GET /v1/files`, returning the `data` field of the
    /// response, or an empty list when absent.
    pub async fn files(&self) -> Result<Vec<Value>> {
        self.transport.data_list("/v1/files").await
    }

    /// Upload a local file.
    ///
    /// Multipart `POST /v1/files` with a binary `file` part (named after the
    /// given path) and a `purpose` text part, e.g. `"assistants"`.
    pub async fn upload_file(&self, path: impl AsRef<Path>, purpose: &str) -> Result<Value> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let part = reqwest::multipart::Part::bytes(contents)
            .file_name(path.to_string_lossy().into_owned());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("purpose", purpose.to_string());
        self.transport.multipart_json("/v1/files", form).await
    }

    /// Fetch a file's descriptor. `GET /v1/files/{file_id}`.
    pub async fn file(&self, file_id: &str) -> Result<Value> {
        self.transport
            .json(Method::GET, &format!("/v1/files/{file_id}"), None)
            .await
    }

    /// Delete a stored file. `DELETE /v1/files/{file_id}`.
    pub async fn delete_file(&self, file_id: &str) -> Result<Value> {
        self.transport
            .json(Method::DELETE, &format!("/v1/files/{file_id}"), None)
            .await
    }

    /// Download a file's raw content to `save_path`.
    ///
    /// `GET /v1/files/{file_id}/content`, with an optional `thread` query
    /// parameter for thread-scoped files. The body bytes are written to disk
    /// unmodified.
    pub async fn download_file_content(
        &self,
        file_id: &str,
        save_path: impl AsRef<Path>,
        thread: Option<&str>,
    ) -> Result<()> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(thread) = thread {
            query.push(("thread", thread));
        }
        let bytes = self
            .transport
            .bytes(&format!("/v1/files/{file_id}/content"), &query)
            .await?;
        tokio::fs::write(save_path, &bytes).await?;
        Ok(())
    }
}
