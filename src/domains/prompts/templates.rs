//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the `{{variable}}`
//! renderer used by every prompt.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// Human-readable title.
    pub title: Option<String>,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// Arguments whose value must be a whole number.
    pub integer_arguments: Vec<String>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template without title or integer arguments.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: None,
            description,
            arguments,
            integer_arguments: Vec::new(),
            template: template.into(),
        }
    }

    /// Check arguments and normalize integer ones.
    ///
    /// Required arguments must be present; integer arguments must parse as
    /// `i64` and are rewritten without surrounding whitespace.
    pub fn prepare(
        &self,
        arguments: HashMap<String, String>,
    ) -> Result<HashMap<String, String>, PromptError> {
        let mut arguments = arguments;

        for arg in &self.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        for name in &self.integer_arguments {
            if let Some(value) = arguments.get_mut(name) {
                let parsed: i64 = value.trim().parse().map_err(|_| {
                    PromptError::invalid_argument(name, format!("expected an integer, got {value:?}"))
                })?;
                *value = parsed.to_string();
            }
        }

        Ok(arguments)
    }

    /// Render the template with the given arguments.
    ///
    /// Every `{{variable}}` is replaced in a single left-to-right pass, so
    /// argument values are never re-expanded. A placeholder without a value
    /// is an error.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut rendered = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| PromptError::template("Unclosed {{ placeholder"))?;
            let key = after[..end].trim();
            let value = arguments
                .get(key)
                .ok_or_else(|| PromptError::template(format!("No value for {{{{{key}}}}}")))?;
            rendered.push_str(value);
            rest = &after[end + 2..];
        }
        rendered.push_str(rest);

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn required(name: &str) -> PromptArgument {
        PromptArgument {
            name: name.to_string(),
            title: None,
            description: None,
            required: Some(true),
        }
    }

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Find {{query}} under {{ budget }}");
        let result = template
            .render(&args(&[("query", "shoes"), ("budget", "2000")]))
            .unwrap();
        assert_eq!(result, "Find shoes under 2000");
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let template = PromptTemplate::new("test", None, vec![], "{{a}} and {{b}}");
        let result = template
            .render(&args(&[("a", "{{b}}"), ("b", "x")]))
            .unwrap();
        assert_eq!(result, "{{b}} and x");
    }

    #[test]
    fn test_unresolved_placeholder_is_error() {
        let template = PromptTemplate::new("test", None, vec![], "Hello {{name}}");
        let err = template.render(&HashMap::new()).unwrap_err();
        assert!(matches!(err, PromptError::TemplateError(_)));
    }

    #[test]
    fn test_unclosed_placeholder_is_error() {
        let template = PromptTemplate::new("test", None, vec![], "Hello {{name");
        assert!(template.render(&args(&[("name", "x")])).is_err());
    }

    #[test]
    fn test_prepare_missing_required() {
        let template = PromptTemplate::new("test", None, vec![required("query")], "{{query}}");
        let err = template.prepare(HashMap::new()).unwrap_err();
        assert!(matches!(err, PromptError::MissingArgument(name) if name == "query"));
    }

    #[test]
    fn test_prepare_integer_arguments() {
        let mut template = PromptTemplate::new("test", None, vec![required("budget")], "{{budget}}");
        template.integer_arguments = vec!["budget".to_string()];

        let prepared = template.prepare(args(&[("budget", " 15000 ")])).unwrap();
        assert_eq!(prepared["budget"], "15000");

        let err = template.prepare(args(&[("budget", "cheap")])).unwrap_err();
        assert!(matches!(err, PromptError::InvalidArgument(name, _) if name == "budget"));

        assert!(template.prepare(args(&[("budget", "1500.5")])).is_err());
    }
}
