//! Prompt service implementation.
//!
//! The PromptService lists the registered prompts and renders them with the
//! caller's arguments. Prompts are defined in `definitions/` and registered
//! via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registered prompts, in listing order.
    prompts: Vec<PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: Vec::new(),
        };

        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.push(template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: template.title.clone(),
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .iter()
            .find(|template| template.name == name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = template.prepare(arguments.unwrap_or_default())?;
        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
