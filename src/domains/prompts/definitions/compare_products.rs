//! Product comparison prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Side-by-side comparison of two products.
pub struct CompareProductsPrompt;

impl PromptDefinition for CompareProductsPrompt {
    const NAME: &'static str = "compare_products";
    const TITLE: &'static str = "Compare Products";
    const DESCRIPTION: &'static str = "Compare two products to help make a purchasing decision";

    fn template() -> &'static str {
        r#"Please help me compare "{{product1}}" and "{{product2}}".

For each product:
1. Search to find the best-rated versions
2. Get detailed product information
3. Compare key aspects:
   - Price and available discounts
   - Technical specifications
   - Customer ratings and reviews
   - Seller reputation
   - Warranty terms
   - Available offers

Present a side-by-side comparison highlighting the pros and cons of each product to help make an informed decision.

## Comparison Steps:
1. Search for "{{product1}}" using search_products
2. Search for "{{product2}}" using search_products
3. Select the best-rated version of each product
4. Get detailed information using get_product_details for both
5. Create a detailed comparison table

## Comparison Areas:
- **Price**: Current price, original price, discount percentage
- **Specifications**: Key technical specs and features
- **Ratings**: Overall rating, number of reviews
- **Seller**: Seller name, seller rating, F-Assured status
- **Offers**: Available bank offers, special deals
- **Warranty**: Warranty terms and service type
- **Stock**: Availability status

## Decision Framework:
- Which offers better value for money?
- Which has better customer satisfaction?
- Which has better after-sales support?
- Which is more suitable for the intended use case?

Provide a clear recommendation with reasoning."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("product1", "First product to compare"),
            required_arg("product2", "Second product to compare"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_products_arguments() {
        let names: Vec<_> = CompareProductsPrompt::arguments()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["product1", "product2"]);
    }
}
