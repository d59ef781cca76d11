//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, title, description, arguments)
//! - Template string
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod best_deals;
mod compare_products;
mod gift_recommendations;
mod product_info;
mod search_results;
mod seasonal_deals;
mod track_price_range;

pub use best_deals::FindBestDealsPrompt;
pub use compare_products::CompareProductsPrompt;
pub use gift_recommendations::GiftRecommendationsPrompt;
pub use product_info::ProductInfoPrompt;
pub use search_results::SearchResultsPrompt;
pub use seasonal_deals::SeasonalDealsPrompt;
pub use track_price_range::TrackPriceRangePrompt;

use rmcp::model::PromptArgument;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// Display title.
    const TITLE: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Arguments that must hold a whole number.
    const INTEGER_ARGUMENTS: &'static [&'static str] = &[];

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}

/// A required argument with a description.
pub(crate) fn required_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}
