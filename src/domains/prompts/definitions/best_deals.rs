//! Best deals prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Hunt for discounted, well-rated products in a category.
pub struct FindBestDealsPrompt;

impl PromptDefinition for FindBestDealsPrompt {
    const NAME: &'static str = "find_best_deals";
    const TITLE: &'static str = "Find Best Deals";
    const DESCRIPTION: &'static str = "Find the best deals in a product category";

    fn template() -> &'static str {
        r#"I want to find the best deals for {{category}}. Please:

1. Search for products in the "{{category}}" category
2. Sort results by price (low to high) to find budget options
3. Also search with popularity sort to find highly-rated products
4. For promising products, get detailed information to check:
   - Discount percentages
   - Original vs current prices
   - Customer ratings
   - Available offers

Focus on products with high ratings (4+ stars) and good discounts (>20%). Present the findings in a clear comparison format.

## Search Strategy:
- Use search_products with query="{{category}}" and sort="price_low_to_high"
- Also try search_products with query="{{category}}" and sort="popularity"
- For top results, use get_product_details to get comprehensive information
- Compare discount percentages and customer ratings

## Evaluation Criteria:
- Rating: 4.0+ stars preferred
- Discount: >20% preferred
- Price: Consider value for money
- Seller: Higher seller rating preferred
- Stock: In-stock products only

Present results in a table format with key metrics for easy comparison."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg("category", "Product category, e.g. \"wireless earbuds\"")]
    }
}
