//! Catalog error types and the failure payload returned to clients.

use serde::Serialize;
use thiserror::Error;

/// Fixed message fragments shared by every failure category.
pub const TIMEOUT_MESSAGE: &str = "Request timed out while connecting to API";
pub const NETWORK_MESSAGE: &str = "Network error occurred while connecting to API";
pub const INVALID_LINK_MESSAGE: &str = "Invalid product link argument provided";

/// Closed set of ways a catalog request can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The backend did not answer within the configured timeout.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// The backend answered with a non-2xx status.
    #[error("HTTP {0}: {msg}", msg = NETWORK_MESSAGE)]
    Status(u16),

    /// DNS, refused connection, reset, or another transport-level failure.
    #[error("{msg}: {0}", msg = NETWORK_MESSAGE)]
    Network(String),

    /// Anything else, most commonly a body that is not valid JSON.
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// The caller supplied a product link argument that cannot be used.
    #[error("{}", INVALID_LINK_MESSAGE)]
    InvalidLink,
}

impl CatalogError {
    /// Create a new "network" error.
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network(detail.into())
    }

    /// Create a new "unexpected" error.
    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected(detail.into())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_connect() || err.is_request() || err.is_body() || err.is_redirect() {
            Self::network(err.to_string())
        } else {
            Self::unexpected(err.to_string())
        }
    }
}

/// The request identifier echoed back in an [`ErrorResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Echo {
    #[serde(rename = "query")]
    Query(String),
    #[serde(rename = "product_link_argument")]
    ProductLink(String),
}

/// Structured failure payload handed back in place of a catalog response.
///
/// Serializes as `{"error": ..., "query" | "product_link_argument": ..., "status": "failed"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: String,
    #[serde(flatten)]
    pub echo: Echo,
    pub status: &'static str,
}

impl ErrorResult {
    /// Build the payload for `err`, echoing the caller's identifier.
    pub fn new(err: &CatalogError, echo: Echo) -> Self {
        Self {
            error: err.to_string(),
            echo,
            status: "failed",
        }
    }

    /// Render as a JSON value.
    pub fn to_value(&self) -> serde_json::Value {
        match &self.echo {
            Echo::Query(query) => serde_json::json!({
                "error": self.error,
                "query": query,
                "status": self.status,
            }),
            Echo::ProductLink(link) => serde_json::json!({
                "error": self.error,
                "product_link_argument": link,
                "status": self.status,
            }),
        }
    }
}
