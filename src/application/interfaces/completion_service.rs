use async_trait::async_trait;

use crate::domain::DomainError;

/// A text-completion capability: turns one prompt into free text.
///
/// Implementors hide the vendor API, transport and serialization so the chat
/// use case can run against a deterministic stub in tests.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send `prompt` and return the model's plain-text output.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Whether the credential needed to reach the API is present. Callers check
    /// this before `generate` so a missing key never costs a network call.
    fn is_configured(&self) -> bool;

    fn model_name(&self) -> &str;
}
