//! Product detail tool.

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
use crate::domains::catalog::CatalogService;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the product detail tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProductDetailsParams {
    /// Product link argument taken from a search result.
    #[schemars(
        description = "The product_link_argument value from a search_products result (e.g. \"realme-buds-t110/p/itm123\")"
    )]
    pub product_link_argument: String,
}

/// Product detail tool.
pub struct ProductDetailsTool;

impl ProductDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_product_details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a specific Flipkart product. \
         Pass the product_link_argument returned by search_products. The response includes the \
         canonical flipkart_url and, when prices allow, a calculated_discount_percent.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(link = %params.product_link_argument))]
    pub async fn execute(params: ProductDetailsParams, catalog: &CatalogService) -> CallToolResult {
        info!("Product details tool called");
        catalog_result(
            catalog
                .get_product_details(&params.product_link_argument)
                .await,
        )
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogService>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ProductDetailsParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(params, &catalog).await;
        Ok(super::common::http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ProductDetailsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Get Product Details".into()),
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
                let params: ProductDetailsParams =
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
    use crate::core::config::BackendConfig;
    use crate::domains::tools::definitions::catalog::common::structured;

    #[test]
    fn test_params_require_link() {
        assert!(serde_json::from_str::<ProductDetailsParams>("{}").is_err());
        let params: ProductDetailsParams =
            serde_json::from_str(r#"{"product_link_argument": "abc/p/itm1"}"#).unwrap();
        assert_eq!(params.product_link_argument, "abc/p/itm1");
    }

    #[tokio::test]
    async fn test_short_link_is_rejected_without_backend() {
        // Port 9 is never contacted: the link is rejected first.
        let catalog = CatalogService::new(BackendConfig::new("http://127.0.0.1:9")).unwrap();
        let params = ProductDetailsParams {
            product_link_argument: "abc".to_string(),
        };

        let result = ProductDetailsTool::execute(params, &catalog).await;
        assert_eq!(result.is_error, Some(true));
        let body = structured(&result);
        assert_eq!(body["product_link_argument"], "abc");
        assert_eq!(body["status"], "failed");
        assert!(body["error"].as_str().unwrap().contains("Invalid product link"));
    }
}
