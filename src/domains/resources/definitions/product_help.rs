//! Product help resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// How to obtain and use product link arguments (static Markdown).
pub struct ProductHelpResource;

impl ResourceDefinition for ProductHelpResource {
    const URI: &'static str = "flipkart://api/product-help";
    const NAME: &'static str = "Product Details Help";
    const DESCRIPTION: &'static str =
        "How to get a product_link_argument and use it with get_product_details";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(DOCUMENTATION.to_string())
    }
}

const DOCUMENTATION: &str = r#"# Flipkart Product Details Help

## How to Get Product Details:
1. First search for products using the search_products tool
2. From the search results, use the `product_link_argument` field or extract it from the `link` field
3. Pass this argument to the get_product_details tool

## Product Link Format:
- Remove "https://www.flipkart.com/" from the full URL
- Example: "realme-buds-air7-52db-anc-12-4mm-driver-52hrs-playback-ip55-45ms-low-latency-bluetooth/p/itm15cefc7cf75ad"

## Product Details Include:
- Complete product specifications
- Current and original pricing
- Discount information
- Stock availability
- Customer ratings
- Product images
- Available offers and deals
- Seller information
- Warranty details

## Tips:
- The link argument should contain "/p/" followed by the product ID
- Arguments shorter than 10 characters are rejected without contacting the API
- If the product is not found, check that the link argument is correct
- Use the calculated_discount_percent field for accurate discount information
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_help_content() {
        match ProductHelpResource::content() {
            ResourceContent::Text(text) => {
                assert!(text.contains("product_link_argument"));
                assert!(text.contains("calculated_discount_percent"));
            }
            other => panic!("Expected text content, got {other:?}"),
        }
    }
}
