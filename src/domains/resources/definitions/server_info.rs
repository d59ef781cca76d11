//! Server info resource definition.

use super::ResourceDefinition;
use crate::core::config::BackendConfig;
use crate::domains::catalog::SortOrder;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Capabilities of this server and the backend it talks to (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "flipkart://api/server-info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Capabilities and configuration of this MCP server";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl ServerInfoResource {
    /// Render the page for the given backend configuration.
    pub fn render(backend: &BackendConfig) -> String {
        let sort_options = SortOrder::ALL
            .iter()
            .map(|sort| sort.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"# Flipkart MCP Server Information

## Server Capabilities:
- **Tools**: Search products, get product details, search by price range
- **Resources**: Help documentation, API status monitoring
- **Prompts**: Guided shopping workflows

## Available Tools:
1. **search_products**: Search Flipkart marketplace with advanced filtering
2. **get_product_details**: Get comprehensive product information
3. **search_by_price_range**: Convenient price-based search

## Available Resources:
1. **search-help**: Comprehensive search guide
2. **product-help**: Product details usage guide
3. **status**: Real-time API server status
4. **server-info**: This information page

## Available Prompts:
1. **get_search_results**: Search for a query and summarize the results
2. **get_product_info**: Get full details for a product link
3. **find_best_deals**: Find the best deals in any category
4. **compare_products**: Compare two products side by side
5. **track_price_range**: Find products within a specific budget
6. **seasonal_deals**: Find seasonal offers in a category
7. **gift_recommendations**: Pick gifts for an occasion and recipient

## Configuration:
- API Base URL: {base_url}
- Default Timeout: {timeout}s
- Supported Sort Options: {sort_options}
"#,
            base_url = backend.base_url,
            timeout = backend.timeout_secs,
        )
    }
}
