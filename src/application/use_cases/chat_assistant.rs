use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::use_cases::chat_prompt::build_prompt;
use crate::application::use_cases::related_products::match_related_products;
use crate::application::{CompletionService, ProductCatalog};
use crate::domain::{ChatReply, DomainError};

/// Message returned when the completion credential is missing.
pub const NOT_CONFIGURED_MESSAGE: &str = "Gemini API key not configured";

/// Answers one shopper question with generated text and related products.
///
/// Every call rebuilds the prompt from the current catalog and makes exactly
/// one completion request. Nothing is cached or retried.
pub struct ChatAssistantUseCase {
    catalog: Arc<dyn ProductCatalog>,
    completion: Arc<dyn CompletionService>,
}

impl ChatAssistantUseCase {
    pub fn new(catalog: Arc<dyn ProductCatalog>, completion: Arc<dyn CompletionService>) -> Self {
        Self {
            catalog,
            completion,
        }
    }

    pub async fn execute(&self, message: &str) -> Result<ChatReply, DomainError> {
        if !self.completion.is_configured() {
            warn!("Chat request rejected: completion credential is not configured");
            return Err(DomainError::configuration(NOT_CONFIGURED_MESSAGE));
        }

        let start_time = Instant::now();

        let products = self.catalog.all_products().await?;
        let prompt = build_prompt(message, &products);
        debug!(
            "Built prompt with {} products ({} bytes) for model {}",
            products.len(),
            prompt.len(),
            self.completion.model_name()
        );

        let content = self.completion.generate(&prompt).await.map_err(|e| match e {
            DomainError::Upstream(_) => e,
            other => DomainError::upstream(other.to_string()),
        })?;

        let related_products = match_related_products(message, &content, &products);

        info!(
            "Chat reply generated in {:.2}s with {} related products",
            start_time.elapsed().as_secs_f64(),
            related_products.len()
        );

        Ok(ChatReply::new(content, related_products))
    }
}
