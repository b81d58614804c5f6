//! Engine management endpoints.
//!
//! An engine is a named inference backend (e.g. `llama-cpp`) installed and
//! versioned by the daemon. Variant/specification payloads are daemon-defined
//! and carried as opaque JSON.

use super::CortexClient;
use crate::Result;
use reqwest::Method;
use serde_json::Value;

impl CortexClient {
    /// List installed variants of an engine. `GET /v1/engines/{name}`.
    pub async fn installed_engines(&self, name: &str) -> Result<Value> {
        self.transport
            .json(Method::GET, &format!("/v1/engines/{name}"), None)
            .await
    }

    /// Fetch the default variant of an engine.
    ///
    /// `GET /v1/engines/{name}/default`.
    pub async fn default_engine(&self, name: &str) -> Result<Value> {
        self.transport
            .json(Method::GET, &format!("/v1/engines/{name}/default"), None)
            .await
    }

    /// Set the default variant of an engine. `POST /v1/engines/{name}/default`.
    pub async fn set_default_engine_variant(
        &self,
        name: &str,
        variant: &Value,
    ) -> Result<Value> {
        self.transport
            .json(
                Method::POST,
                &format!("/v1/engines/{name}/default"),
                Some(variant),
            )
            .await
    }

    /// Install an engine variant. `POST /v1/engines/{name}/install`.
    pub async fn install_engine(&self, name: &str, specification: &Value) -> Result<Value> {
        self.transport
            .json(
                Method::POST,
                &format!("/v1/engines/{name}/install"),
                Some(specification),
            )
            .await
    }

    /// Uninstall an engine variant.
    ///
    /// `DELETE /v1/engines/{name}/install`, with the variant selector in the
    /// body.
    pub async fn uninstall_engine(&self, name: &str, variant: &Value) -> Result<Value> {
        self.transport
            .json(
                Method::DELETE,
                &format!("/v1/engines/{name}/install"),
                Some(variant),
            )
            .await
    }

    /// Load an engine into memory. `POST /v1/engines/{name}/load`.
    pub async fn load_engine(&self, name: &str) -> Result<Value> {
        self.transport
            .json(Method::POST, &format!("/v1/engines/{name}/load"), None)
            .await
    }

    /// Unload an engine. `DELETE /v1/engines/{name}/load`.
    pub async fn unload_engine(&self, name: &str) -> Result<Value> {
        self.transport
            .json(Method::DELETE, &format!("/v1/engines/{name}/load"), None)
            .await
    }

    /// List published releases of an engine. `GET /v1/engines/{name}/releases`.
    pub async fn engine_releases(&self, name: &str) -> Result<Value> {
        self.transport
            .json(Method::GET, &format!("/v1/engines/{name}/releases"), None)
            .await
    }

    /// Fetch the latest published release of an engine.
    ///
    /// `GET /v1/engines/{name}/releases/latest`.
    pub async fn latest_engine_release(&self, name: &str) -> Result<Value> {
        self.transport
            .json(
                Method::GET,
                &format!("/v1/engines/{name}/releases/latest"),
                None,
            )
            .await
    }

    /// Update an installed engine to the latest release.
    ///
    /// `POST /v1/engines/{name}/update`.
    pub async fn update_engine(&self, name: &str) -> Result<Value> {
        self.transport
            .json(Method::POST, &format!("/v1/engines/{name}/update"), None)
            .await
    }
}
