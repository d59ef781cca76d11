//! Search results prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Search for a query and present the results.
pub struct SearchResultsPrompt;

impl PromptDefinition for SearchResultsPrompt {
    const NAME: &'static str = "get_search_results";
    const TITLE: &'static str = "Get Search Results";
    const DESCRIPTION: &'static str = "Search Flipkart for a query and present the results";

    fn template() -> &'static str {
        r#"Please search for "{{query}}" on Flipkart and provide me with the search results.

Use the search_products tool with:
- query: "{{query}}"
- You can optionally specify sort, page_number, min_price, or max_price if needed

The search results will include:
- Product names and descriptions
- Prices (current and original)
- Ratings and reviews
- Product links
- Available offers
- product_link_argument (which can be passed to get_product_details)

Please present the results in a clear, organized format showing the key information for each product."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg("query", "What to search for")]
    }
}
