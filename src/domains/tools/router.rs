//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! to a shared catalog service.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::catalog::CatalogService;

use super::definitions::{PriceRangeSearchTool, ProductDetailsTool, SearchProductsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(catalog: Arc<CatalogService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchProductsTool::create_route(catalog.clone()))
        .with_route(ProductDetailsTool::create_route(catalog.clone()))
        .with_route(PriceRangeSearchTool::create_route(catalog))
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "http")]
    use super::super::{ToolError, registry::ToolRegistry};
    use super::*;
    use crate::core::config::BackendConfig;

    struct TestServer {}

    fn test_catalog() -> Arc<CatalogService> {
        Arc::new(CatalogService::new(BackendConfig::new("http://127.0.0.1:9")).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_catalog());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search_products"));
        assert!(names.contains(&"get_product_details"));
        assert!(names.contains(&"search_by_price_range"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_dispatches_every_routed_tool() {
        let catalog = test_catalog();
        let registry = ToolRegistry::new(catalog.clone());

        let router: ToolRouter<TestServer> = build_tool_router(catalog);
        for tool in router.list_all() {
            let result = registry.call_tool(&tool.name, serde_json::json!({})).await;
            assert!(
                matches!(result, Err(ToolError::InvalidArguments(_))),
                "{} is not dispatched over HTTP",
                tool.name
            );
        }
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        let router: ToolRouter<TestServer> = build_tool_router(test_catalog());
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} lacks a description", tool.name);
        }
    }
}
