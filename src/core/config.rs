//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) and then overridden by
//! command-line flags. Values are read-only once the server starts.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default backend API location when `FLIPKART_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout for catalog calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default timeout for the API status probe, in seconds.
pub const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 5;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Catalog backend connection settings.
    pub backend: BackendConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Connection settings for the catalog backend API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,

    /// Timeout applied to every catalog request.
    pub timeout_secs: u64,

    /// Timeout applied to the status probe behind `flipkart://api/status`.
    pub status_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl BackendConfig {
    /// Create a backend config pointing at `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            status_timeout_secs: DEFAULT_STATUS_TIMEOUT_SECS,
        }
    }

    /// Per-request timeout for catalog calls.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Timeout for the status probe.
    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Strip surrounding whitespace and trailing slashes so paths can be appended.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Flipkart API Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            backend: BackendConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// The backend location keeps its historical name `FLIPKART_API_BASE_URL`;
    /// everything else is prefixed with `MCP_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("FLIPKART_API_BASE_URL") {
            config.backend.base_url = normalize_base_url(&base_url);
            info!("Catalog API base URL: {}", config.backend.base_url);
        }

        if let Some(secs) = parse_secs("MCP_BACKEND_TIMEOUT_SECS") {
            config.backend.timeout_secs = secs;
        }

        if let Some(secs) = parse_secs("MCP_STATUS_TIMEOUT_SECS") {
            config.backend.status_timeout_secs = secs;
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

/// Read a positive number of seconds from `var`, warning on junk values.
fn parse_secs(var: &str) -> Option<u64> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            warn!("Ignoring invalid {}={:?}, expected a positive integer", var, raw);
            None
        }
    }
}
