//! Budget tracking prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Best-value picks under a budget.
pub struct TrackPriceRangePrompt;

impl PromptDefinition for TrackPriceRangePrompt {
    const NAME: &'static str = "track_price_range";
    const TITLE: &'static str = "Track Price Range";
    const DESCRIPTION: &'static str = "Find products within a specific budget";
    const INTEGER_ARGUMENTS: &'static [&'static str] = &["budget"];

    fn template() -> &'static str {
        r#"I'm looking for "{{product_name}}" within a budget of ₹{{budget}}. Please:

1. Search for the product with max_price set to {{budget}}
2. Sort results by price (low to high) to maximize value
3. For products within budget, get detailed information
4. Identify the best value options considering:
   - Features vs price ratio
   - Brand reputation
   - Customer ratings
   - Warranty coverage
   - Current offers and discounts

Recommend the top 3 options that provide the best value within the budget.

## Search Strategy:
- Use search_by_price_range with query="{{product_name}}", min_price=0, max_price={{budget}}
- Sort by "price_low_to_high" to find the best deals first
- Get detailed information for the top 5-7 results
- Analyze value proposition for each

## Evaluation Criteria:
- **Price**: Must be ≤ ₹{{budget}}
- **Value**: Features offered relative to price
- **Quality**: Brand reputation and build quality
- **Ratings**: Customer satisfaction (prefer 4+ stars)
- **Warranty**: Coverage and service quality
- **Offers**: Additional savings available

## Output Format:
### Budget Analysis: ₹{{budget}}
1. **Option 1**: [Product Name]
   - Price: ₹[amount] (savings: ₹[amount])
   - Key Features: [list main features]
   - Rating: [rating]/5 ([number] reviews)
   - Why it's good value: [explanation]

2. **Option 2**: [Product Name]
   - [Similar format]

3. **Option 3**: [Product Name]
   - [Similar format]

### Recommendation:
Based on the analysis, recommend the best option with clear reasoning."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("product_name", "Product to look for"),
            required_arg("budget", "Maximum price in rupees (whole number)"),
        ]
    }
}
