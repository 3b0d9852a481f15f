use async_trait::async_trait;

use crate::domain::{ChatReply, DomainError};

/// Client side of the chat endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Deliver one user message and return the endpoint's reply. Non-success
    /// statuses, network failures and unparseable bodies are all errors.
    async fn send(&self, message: &str) -> Result<ChatReply, DomainError>;
}
