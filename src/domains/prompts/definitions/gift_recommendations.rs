//! Gift recommendations prompt definition.

use super::{PromptDefinition, required_arg};
use rmcp::model::PromptArgument;

/// Gift ideas for an occasion, budget and recipient.
pub struct GiftRecommendationsPrompt;

impl PromptDefinition for GiftRecommendationsPrompt {
    const NAME: &'static str = "gift_recommendations";
    const TITLE: &'static str = "Gift Recommendations";
    const DESCRIPTION: &'static str =
        "Find gift recommendations for a specific occasion and recipient";
    const INTEGER_ARGUMENTS: &'static [&'static str] = &["budget"];

    fn template() -> &'static str {
        r#"I need gift recommendations for {{occasion}} with a budget of ₹{{budget}} for {{recipient}}. Please:

1. Search for appropriate gift categories based on the occasion and recipient
2. Filter products within the specified budget
3. Focus on highly-rated products with good reviews
4. Consider gift-appropriate features (packaging, warranty, etc.)
5. Look for products with good return/exchange policies

Provide personalized recommendations based on the occasion and recipient profile.

## Gift Selection Criteria:
- **Budget**: ₹{{budget}} (allow 10% flexibility)
- **Occasion**: {{occasion}} appropriateness
- **Recipient**: {{recipient}} preferences and needs
- **Quality**: High ratings and positive reviews
- **Presentation**: Gift-worthy packaging and appearance
- **Reliability**: Trusted brands and sellers

## Search Strategy:
- Identify relevant product categories for {{recipient}}
- Use price filtering to stay within budget
- Sort by ratings and popularity
- Check for gift-specific features (gift wrapping, etc.)

## Recommendation Format:
### Gift Options for {{recipient}} - {{occasion}}
1. **[Product Name]** - ₹[price]
   - Why it's perfect: [relevance to occasion/recipient]
   - Key features: [main selling points]
   - Rating: [rating]/5
   - Gift appeal: [packaging, brand value, etc.]

2. **[Product Name]** - ₹[price]
   - [Similar format]

3. **[Product Name]** - ₹[price]
   - [Similar format]

### Final Recommendation:
Choose the most suitable option with reasoning based on the specific occasion and recipient."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("occasion", "Occasion, e.g. \"birthday\""),
            required_arg("budget", "Budget in rupees (whole number)"),
            required_arg("recipient", "Who the gift is for"),
        ]
    }
}
