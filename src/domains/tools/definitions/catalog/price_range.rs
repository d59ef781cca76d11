//! Price-band search tool.
//!
//! A thin variant of `search_products` where both price bounds are required
//! and results default to cheapest first.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::catalog_result;
use crate::domains::catalog::{CatalogService, SortOrder};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the price-band search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PriceRangeParams {
    /// Search query string.
    #[schemars(description = "Search query string")]
    pub query: String,

    /// Lower price bound.
    #[schemars(description = "Minimum price")]
    pub min_price: u64,

    /// Upper price bound.
    #[schemars(description = "Maximum price")]
    pub max_price: u64,

    /// Sort order (default: price_low_to_high).
    #[serde(default)]
    #[schemars(
        description = "Sort order (default: price_low_to_high). One of relevance, price_low_to_high, price_high_to_low, newest_first, popularity"
    )]
    pub sort: Option<SortOrder>,

    /// Page number for pagination (default: 1).
    #[serde(default)]
    #[schemars(description = "Page number for pagination (default: 1)")]
    pub page_number: Option<u32>,
}

/// Price-band search tool.
pub struct PriceRangeSearchTool;

impl PriceRangeSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_by_price_range";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for Flipkart products within a specific price range. \
         Results are sorted by price (low to high) unless another sort order is given.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query, min = params.min_price, max = params.max_price))]
    pub async fn execute(params: PriceRangeParams, catalog: &CatalogService) -> CallToolResult {
        info!("Price range search tool called");
        catalog_result(
            catalog
                .search_by_price_range(
                    params.query,
                    params.min_price,
                    params.max_price,
                    params.sort,
                    params.page_number,
                )
                .await,
        )
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogService>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: PriceRangeParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(params, &catalog).await;
        Ok(super::common::http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PriceRangeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Search By Price Range".into()),
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(catalog: Arc<CatalogService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let catalog = catalog.clone();
            async move {
                let params: PriceRangeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(params, &catalog).await)
            }
            .boxed()
        })
    }
}
