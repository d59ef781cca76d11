//! Tool Registry - HTTP dispatch for tool calls.
//!
//! Listing goes through the rmcp `ToolRouter` built in `router.rs` for every
//! transport.

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use crate::domains::catalog::CatalogService;

#[cfg(feature = "http")]
use super::ToolError;
#[cfg(feature = "http")]
use super::definitions::{PriceRangeSearchTool, ProductDetailsTool, SearchProductsTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    catalog: Arc<CatalogService>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `catalog`.
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let catalog = self.catalog.clone();
        match name {
            SearchProductsTool::NAME => SearchProductsTool::http_handler(arguments, catalog).await,
            ProductDetailsTool::NAME => ProductDetailsTool::http_handler(arguments, catalog).await,
            PriceRangeSearchTool::NAME => {
                PriceRangeSearchTool::http_handler(arguments, catalog).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
