//! Product search tool.
//!
//! Searches the catalog with optional sort, page and price filters. Each
//! listing in the response gains a `product_link_argument` that can be passed
//! straight to `get_product_details`.

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
use crate::domains::catalog::{CatalogService, SearchQuery, SortOrder};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the product search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchProductsParams {
    /// Search query string.
    #[schemars(description = "Search query string (e.g. \"realme earbuds\")")]
    pub query: String,

    /// Sort order (default: relevance).
    #[serde(default)]
    #[schemars(
        description = "Sort order: relevance (default), price_low_to_high, price_high_to_low, newest_first, popularity"
    )]
    pub sort: Option<SortOrder>,

    /// Page number for pagination (default: 1).
    #[serde(default)]
    #[schemars(description = "Page number for pagination (default: 1)")]
    pub page_number: Option<u32>,

    /// Minimum price filter.
    #[serde(default)]
    #[schemars(description = "Minimum price filter")]
    pub min_price: Option<u64>,

    /// Maximum price filter.
    #[serde(default)]
    #[schemars(description = "Maximum price filter")]
    pub max_price: Option<u64>,
}

impl From<SearchProductsParams> for SearchQuery {
    fn from(params: SearchProductsParams) -> Self {
        Self {
            query: params.query,
            sort: params.sort,
            page_number: params.page_number,
            min_price: params.min_price,
            max_price: params.max_price,
        }
    }
}

/// Product search tool.
pub struct SearchProductsTool;

impl SearchProductsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_products";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for products on the Flipkart marketplace. \
         Supports sorting (relevance, price_low_to_high, price_high_to_low, newest_first, popularity), \
         pagination and min/max price filters. Each listing includes a product_link_argument \
         that can be passed to get_product_details.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(params: SearchProductsParams, catalog: &CatalogService) -> CallToolResult {
        info!("Search products tool called");
        let search = SearchQuery::from(params);
        catalog_result(catalog.search_products(&search).await)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogService>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: SearchProductsParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(params, &catalog).await;
        Ok(super::common::http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchProductsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Search Products".into()),
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
                let params: SearchProductsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(params, &catalog).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_minimal() {
        let params: SearchProductsParams =
            serde_json::from_str(r#"{"query": "realme earbuds"}"#).unwrap();
        assert_eq!(params.query, "realme earbuds");
        assert!(params.sort.is_none());
        assert!(params.page_number.is_none());
    }

    #[test]
    fn test_params_into_query() {
        let params: SearchProductsParams = serde_json::from_str(
            r#"{"query": "laptop", "sort": "popularity", "page_number": 3, "min_price": 30000, "max_price": null}"#,
        )
        .unwrap();
        let query = SearchQuery::from(params);
        assert_eq!(query.sort, Some(SortOrder::Popularity));
        assert_eq!(query.page_number, Some(3));
        assert_eq!(query.min_price, Some(30000));
        assert_eq!(query.max_price, None);
    }

    #[test]
    fn test_params_reject_unknown_sort() {
        let parsed = serde_json::from_str::<SearchProductsParams>(
            r#"{"query": "laptop", "sort": "cheapest"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = SearchProductsTool::to_tool();
        assert_eq!(tool.name, "search_products");
        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert!(schema["properties"]["query"].is_object());
        assert!(schema["properties"]["max_price"].is_object());
    }
}
