//! HTTP dispatch shared by all endpoint bindings.
//!
//! One outbound request per call, no retries, no response interpretation.
//! Non-2xx statuses are not transport failures here: bindings that return
//! JSON decode the body regardless of status, so server-defined error
//! payloads reach the caller unchanged.

use crate::{Error, Result};
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, trace};

/// A pooled [`reqwest::Client`] bound to the daemon's base URL.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` must already be validated and stripped of trailing slashes.
    pub(crate) fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "dispatching request");
        self.client.request(method, url)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response> {
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            trace!(body = %body, "request body");
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    async fn read_json(response: reqwest::Response) -> Result<Value> {
        let bytes = response.bytes().await?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| Error::decode(e, &bytes))?;
        trace!(body = %value, "response body");
        Ok(value)
    }

    /// Issue a request and decode the body as JSON, whatever the status.
    pub(crate) async fn json(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        let response = self.send(method, path, body).await?;
        Self::read_json(response).await
    }

    /// GET with query parameters, decoding the body as JSON.
    pub(crate) async fn json_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::read_json(response).await
    }

    /// GET a list endpoint and extract its `data` field, or an empty list
    /// when the field is absent or not an array.
    pub(crate) async fn data_list(&self, path: &str) -> Result<Vec<Value>> {
        let mut body = self.json(Method::GET, path, None).await?;
        match body.get_mut("data").map(Value::take) {
            Some(Value::Array(items)) => Ok(items),
            _ => Ok(Vec::new()),
        }
    }

    /// Issue a request and return only the response status.
    pub(crate) async fn status(&self, method: Method, path: &str) -> Result<StatusCode> {
        let response = self.send(method, path, None).await?;
        Ok(response.status())
    }

    /// Issue a request and return the status code and raw body text.
    pub(crate) async fn status_and_text(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(StatusCode, String)> {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    /// Issue a request and return the raw body text.
    pub(crate) async fn text(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<String> {
        let response = self.send(method, path, body).await?;
        Ok(response.text().await?)
    }

    /// GET raw body bytes, e.g. for file-content downloads.
    pub(crate) async fn bytes(&self, path: &str, query: &[(&str, &str)]) -> Result<Bytes> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Ok(response.bytes().await?)
    }

    /// POST a multipart form and decode the body as JSON.
    pub(crate) async fn multipart_json(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value> {
        let response = self.request(Method::POST, path).multipart(form).send().await?;
        Self::read_json(response).await
    }
}
