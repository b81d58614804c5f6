use super::CortexClient;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use std::time::Duration;

/// Default address the Cortex daemon listens on.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:39281";

/// Builder for [`CortexClient`].
///
/// Keep this surface small: a base URL and an optional request timeout. By
/// default no timeout is set, so long-running calls such as model pulls block
/// until the daemon answers.
///
/// Environment overrides, consulted only where no explicit value was given:
/// - `CORTEX_BASE_URL` — daemon address
/// - `CORTEX_HTTP_TIMEOUT_SECS` — request timeout in seconds
// TODO: add an opt-in that spawns `cortex start` and polls `/healthz` until
// the daemon is ready, for callers that do not manage the process themselves.
pub struct CortexClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl CortexClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the daemon address. Trailing slashes are trimmed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<CortexClient> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("CORTEX_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|e| Error::Configuration(format!("invalid base URL {base_url:?}: {e}")))?;

        let timeout = self.timeout.or_else(|| {
            std::env::var("CORTEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
        });

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(CortexClient {
            transport: HttpTransport::new(client, base_url),
        })
    }
}

impl Default for CortexClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
