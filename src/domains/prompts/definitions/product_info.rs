//! Product info prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Fetch and present full details for a product link.
pub struct ProductInfoPrompt;

impl PromptDefinition for ProductInfoPrompt {
    const NAME: &'static str = "get_product_info";
    const TITLE: &'static str = "Get Product Information";
    const DESCRIPTION: &'static str =
        "Get detailed information about a product from its link argument or listing URL";

    fn template() -> &'static str {
        r#"Please get detailed information about the product using this link: "{{product_link_or_query_url}}"

Instructions:
1. If the link starts with "0.0.0.0:3000" or any other base URL, remove this prefix to get the product_link_argument
2. Use the get_product_details tool with the cleaned product_link_argument
3. The product_link_argument from search results can be used directly

The detailed product information will include:
- Complete product specifications
- Detailed pricing information (current price, original price, discounts)
- Customer ratings and reviews
- Available offers and deals
- Product images and descriptions
- Seller information
- Shipping and return policies
- Stock availability

Present the information in a comprehensive format covering all the important details a customer would need to make a purchasing decision."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg(
            "product_link_or_query_url",
            "A product_link_argument or a product URL from search results",
        )]
    }
}
