//! HTTP client adapter for the catalog backend.
//!
//! Every call is a single GET with the configured timeout. Failures come back
//! as a [`CatalogError`] value; nothing is retried.

use reqwest::Client;
use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument, warn};

use super::error::CatalogError;
use crate::core::config::BackendConfig;

/// Thin wrapper around `reqwest::Client` bound to one backend.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    config: BackendConfig,
}

/// Reachability of the backend root endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiStatus {
    /// `GET /` answered 200.
    Running,
    /// `GET /` answered with another status.
    Responded(u16),
    /// The probe hit its timeout.
    TimedOut,
    /// The connection could not be established.
    Unreachable,
    /// Any other failure.
    Failed(String),
}

impl CatalogClient {
    /// Create a client for the backend described by `config`.
    pub fn new(config: BackendConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("flipkart-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::unexpected(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// The backend settings this client was built with.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Base URL of the backend, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET `url` and parse the 2xx body as JSON.
    #[instrument(skip(self))]
    pub async fn get_json(&self, url: &str) -> Result<Value, CatalogError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(CatalogError::from)
            .inspect_err(|e| warn!("Catalog request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog API answered {}", status);
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(CatalogError::from)?;
        debug!("Catalog API answered {} ({} bytes)", status, body.len());

        serde_json::from_str(&body).map_err(|e| {
            warn!("Catalog API returned invalid JSON: {}", e);
            CatalogError::unexpected(e.to_string())
        })
    }

    /// Probe the backend root with the shorter status timeout.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> ApiStatus {
        let url = format!("{}/", self.config.base_url);
        let result = self
            .http
            .get(&url)
            .timeout(self.config.status_timeout())
            .send()
            .await;

        match result {
            Ok(response) if response.status().as_u16() == 200 => ApiStatus::Running,
            Ok(response) => ApiStatus::Responded(response.status().as_u16()),
            Err(e) if e.is_timeout() => ApiStatus::TimedOut,
            Err(e) if e.is_connect() => ApiStatus::Unreachable,
            Err(e) => ApiStatus::Failed(e.to_string()),
        }
    }
}

impl ApiStatus {
    /// Status line for a backend at `base_url`.
    pub fn describe(&self, base_url: &str) -> String {
        match self {
            Self::Running => format!("✅ Flipkart API server is running at {base_url}"),
            Self::Responded(code) => {
                format!("⚠️ Flipkart API server responded with status {code}")
            }
            Self::TimedOut => format!("⏱️ Flipkart API server connection timed out at {base_url}"),
            Self::Unreachable => format!("❌ Cannot connect to Flipkart API server at {base_url}"),
            Self::Failed(detail) => format!("❌ Flipkart API server error: {detail}"),
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Responded(code) => write!(f, "responded with status {code}"),
            Self::TimedOut => f.write_str("timed out"),
            Self::Unreachable => f.write_str("unreachable"),
            Self::Failed(detail) => write!(f, "error: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_config() {
        let client = CatalogClient::new(BackendConfig::new("http://catalog:3000/")).unwrap();
        assert_eq!(client.base_url(), "http://catalog:3000");
        assert_eq!(client.config().timeout_secs, 30);
    }

    #[test]
    fn test_status_descriptions() {
        let base = "http://localhost:3000";
        assert!(ApiStatus::Running.describe(base).contains("running at http://localhost:3000"));
        assert!(ApiStatus::Responded(503).describe(base).contains("status 503"));
        assert!(ApiStatus::TimedOut.describe(base).contains("timed out"));
        assert!(ApiStatus::Unreachable.describe(base).contains("Cannot connect"));
        assert!(ApiStatus::Failed("boom".into()).describe(base).ends_with("boom"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) on localhost is not expected to accept connections.
        let client = CatalogClient::new(BackendConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.get_json("http://127.0.0.1:9/search/x").await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)), "got {err:?}");
    }
}
