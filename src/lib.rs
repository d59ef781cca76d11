//! Flipkart catalog MCP server.
//!
//! Exposes a Flipkart-style product catalog HTTP API to AI agents over the
//! Model Context Protocol: three tools (`search_products`,
//! `get_product_details`, `search_by_price_range`), four resources and a
//! set of shopping prompts.
//!
//! # Architecture
//!
//! - **core**: configuration, CLI overrides, error handling, the MCP server
//!   handler and the stdio / tcp / http transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: backend client, request builders and response normalization
//!   - **tools**: MCP tools that call the catalog
//!   - **resources**: help pages, API status and server info
//!   - **prompts**: guided shopping prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use flipkart_mcp_server::{core::Config, core::McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
