//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    CompareProductsPrompt, FindBestDealsPrompt, GiftRecommendationsPrompt, ProductInfoPrompt,
    PromptDefinition, SearchResultsPrompt, SeasonalDealsPrompt, TrackPriceRangePrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        title: Some(P::TITLE.to_string()),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        integer_arguments: P::INTEGER_ARGUMENTS.iter().map(|s| s.to_string()).collect(),
        template: P::template().to_string(),
    }
}

/// Get all registered prompts as PromptTemplates, in listing order.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<SearchResultsPrompt>(),
        build_template::<ProductInfoPrompt>(),
        build_template::<FindBestDealsPrompt>(),
        build_template::<CompareProductsPrompt>(),
        build_template::<TrackPriceRangePrompt>(),
        build_template::<SeasonalDealsPrompt>(),
        build_template::<GiftRecommendationsPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        SearchResultsPrompt::NAME,
        ProductInfoPrompt::NAME,
        FindBestDealsPrompt::NAME,
        CompareProductsPrompt::NAME,
        TrackPriceRangePrompt::NAME,
        SeasonalDealsPrompt::NAME,
        GiftRecommendationsPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 7);

        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, prompt_names());
    }

    #[test]
    fn test_placeholders_match_arguments() {
        for prompt in get_all_prompts() {
            let declared: HashSet<_> = prompt.arguments.iter().map(|a| a.name.clone()).collect();
            let values = declared
                .iter()
                .map(|name| (name.clone(), "1".to_string()))
                .collect();
            assert!(
                prompt.render(&values).is_ok(),
                "{} uses an undeclared placeholder",
                prompt.name
            );
            for name in &prompt.integer_arguments {
                assert!(declared.contains(name), "{} lacks argument {}", prompt.name, name);
            }
        }
    }
}
