use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatTransport;
use crate::domain::{ChatReply, ChatRequest, DomainError};

pub const CHAT_PATH: &str = "/api/chat";

/// Calls a storefront's `POST /api/chat` over HTTP.
///
/// Any non-2xx status is a failure and the body is not read.
pub struct HttpChatTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpChatTransport {
    /// `endpoint` is the server root, e.g. `http://localhost:3000`.
    pub fn new(endpoint: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{CHAT_PATH}", endpoint.as_ref().trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("chat request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::transport(format!(
                "chat endpoint returned {}",
                response.status()
            )));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| DomainError::transport(format!("invalid chat response: {e}")))?;

        debug!(
            "Chat reply with {} related products",
            reply.related_products.len()
        );
        Ok(reply)
    }
}
