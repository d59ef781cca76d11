//! Seasonal deals prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Seasonal offers in a category.
pub struct SeasonalDealsPrompt;

impl PromptDefinition for SeasonalDealsPrompt {
    const NAME: &'static str = "seasonal_deals";
    const TITLE: &'static str = "Seasonal Deals Finder";
    const DESCRIPTION: &'static str = "Find seasonal deals and offers in a specific category";

    fn template() -> &'static str {
        r#"Help me find the best {{season}} deals for {{category}}. Please:

1. Search for products in the "{{category}}" category
2. Look for seasonal discounts and special offers
3. Compare current prices with historical pricing trends
4. Identify limited-time offers and flash sales
5. Check for seasonal-specific product variants

Focus on products with significant seasonal discounts and time-limited offers.

## Search Strategy:
- Search for "{{category}}" with different sort options
- Look for products with high discount percentages
- Check for seasonal keywords in product descriptions
- Identify F-Assured products for guaranteed quality

## Deal Analysis:
- **Discount Depth**: Look for >30% seasonal discounts
- **Offer Types**: Bank offers, exchange offers, EMI options
- **Seasonal Variants**: Special {{season}} editions or colors
- **Bundle Deals**: Combo offers and package deals
- **Flash Sales**: Time-limited promotional pricing

## Timing Considerations:
- Current {{season}} season relevance
- Upcoming festivals and shopping events
- End-of-season clearance opportunities
- New product launch timings

Present the best seasonal deals with urgency indicators and deal expiration information."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("season", "Season or festival, e.g. \"Diwali\" or \"summer\""),
            required_arg("category", "Product category"),
        ]
    }
}
