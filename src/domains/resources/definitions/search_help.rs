//! Search help resource definition.

use super::ResourceDefinition;
use crate::domains::catalog::SortOrder;
use crate::domains::resources::service::ResourceContent;

/// Guide to the search tool's parameters and sort orders (static Markdown).
pub struct SearchHelpResource;

impl ResourceDefinition for SearchHelpResource {
    const URI: &'static str = "flipkart://api/search-help";
    const NAME: &'static str = "Search Help";
    const DESCRIPTION: &'static str =
        "Sort options, search tips and parameter reference for product search";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(render())
    }
}

fn render() -> String {
    let sort_options = SortOrder::ALL
        .iter()
        .map(|sort| format!("- **{}**: {}", sort.as_str(), sort.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"# Flipkart Search Help

## Available Sort Options:
{sort_options}

## Search Tips:
- Use specific product names for better results (e.g., "iPhone 15", "Samsung Galaxy S24")
- Add brand names to narrow down results (e.g., "Nike running shoes", "Adidas sneakers")
- Use price filters to find products within your budget
- Try different sort orders to find the best deals or latest products

## Examples:
- Basic search: "wireless earbuds"
- With price filter: "laptop" with min_price=30000, max_price=50000
- With sorting: "mobile phone" sorted by "price_low_to_high"

## Query Parameters:
- **query**: Search term (required)
- **sort**: Sort order (optional, default: "relevance")
- **page_number**: Page number for pagination (optional, default: 1)
- **min_price**: Minimum price filter (optional)
- **max_price**: Maximum price filter (optional)
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_help_metadata() {
        assert_eq!(SearchHelpResource::URI, "flipkart://api/search-help");
        assert_eq!(SearchHelpResource::MIME_TYPE, "text/markdown");
    }

    #[test]
    fn test_search_help_lists_every_sort_order() {
        let ResourceContent::Text(text) = SearchHelpResource::content() else {
            panic!("Expected text content");
        };
        for sort in SortOrder::ALL {
            assert!(text.contains(sort.as_str()), "missing {sort}");
        }
        assert!(text.contains("- **price_low_to_high**: Price Low To High"));
    }
}
