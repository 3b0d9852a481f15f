use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Bot => "bot",
        }
    }
}

/// One turn of a conversation.
///
/// Only bot messages can carry related products; the constructors are the only
/// way to build a message so a user message never has any attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    id: String,
    role: ChatRole,
    content: String,
    /// Epoch milliseconds.
    timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    related_products: Option<Vec<Product>>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::User,
            content: content.into(),
            timestamp: current_timestamp_millis(),
            related_products: None,
        }
    }

    pub fn bot(content: impl Into<String>, related_products: Vec<Product>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::Bot,
            content: content.into(),
            timestamp: current_timestamp_millis(),
            related_products: Some(related_products),
        }
    }

    /// A bot message with no product list at all, as opposed to an empty one.
    pub fn bot_text(content: impl Into<String>) -> Self {
        Self {
            related_products: None,
            ..Self::bot(content, Vec::new())
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn related_products(&self) -> &[Product] {
        self.related_products.as_deref().unwrap_or(&[])
    }

    pub fn has_related_products(&self) -> bool {
        self.related_products.as_ref().is_some_and(|p| !p.is_empty())
    }

    pub fn is_from_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful answer from the chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub content: String,
    #[serde(default)]
    pub related_products: Vec<Product>,
}

impl ChatReply {
    pub fn new(content: impl Into<String>, related_products: Vec<Product>) -> Self {
        Self {
            content: content.into(),
            related_products,
        }
    }
}

impl From<ChatReply> for ChatMessage {
    fn from(reply: ChatReply) -> Self {
        ChatMessage::bot(reply.content, reply.related_products)
    }
}

fn current_timestamp_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
