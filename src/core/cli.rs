//! Command-line flags.
//!
//! Flags override what [`Config::from_env`] loaded. Anything not given on the
//! command line keeps its environment or default value.

use clap::Parser;

use super::config::{Config, normalize_base_url};
use super::error::{Error, Result};
use super::transport::TransportConfig;

/// MCP server for a Flipkart-style product catalog API.
#[derive(Debug, Default, Parser)]
#[command(name = "flipkart_mcp_server", version, about)]
pub struct Cli {
    /// Transport to serve on: stdio, tcp or http.
    #[arg(long, env = "MCP_TRANSPORT")]
    pub transport: Option<String>,

    /// Bind host for the tcp/http transports.
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port for the tcp/http transports.
    #[arg(long)]
    pub port: Option<u16>,

    /// Base URL of the catalog API.
    #[arg(long, env = "FLIPKART_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Timeout for catalog requests, in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "MCP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Apply the flags on top of `config`.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(name) = &self.transport {
            if !name.eq_ignore_ascii_case(config.transport.name()) {
                config.transport = TransportConfig::from_name(name).ok_or_else(|| {
                    Error::config(format!(
                        "unknown or disabled transport {name:?} (this build supports {})",
                        supported_transports()
                    ))
                })?;
            }
        }

        if let Some(host) = &self.host {
            config.transport.set_host(host.clone());
        }

        if let Some(port) = self.port {
            config.transport.set_port(port);
        }

        if let Some(base_url) = &self.base_url {
            config.backend.base_url = normalize_base_url(base_url);
        }

        if let Some(timeout) = self.timeout {
            config.backend.timeout_secs = timeout;
        }

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }

        Ok(())
    }
}

fn supported_transports() -> String {
    ["stdio", "tcp", "http"]
        .into_iter()
        .filter(|name| TransportConfig::from_name(name).is_some())
        .collect::<Vec<_>>()
        .join(", ")
}
