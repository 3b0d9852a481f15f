use std::sync::Arc;

use tracing::warn;

use crate::application::ChatTransport;
use crate::domain::{ChatMessage, ChatReply, DomainError};

/// Shown instead of an answer whenever the chat endpoint cannot be used.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble accessing my neural network right now. Please try again in a moment.";

/// First message of every conversation.
pub const WELCOME_MESSAGE: &str =
    "Hi! 👋 I generate real-time product recommendations and answers. Ask me anything!";

/// Turns user text into a bot message by calling the chat endpoint.
pub struct ChatSession {
    transport: Arc<dyn ChatTransport>,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self { transport }
    }

    /// The raw outcome of one request, for callers that want to tell failures
    /// apart.
    pub async fn request_reply(&self, content: &str) -> Result<ChatReply, DomainError> {
        self.transport.send(content).await
    }

    /// Never fails: any transport or parse error becomes [`FALLBACK_REPLY`]
    /// with no related products.
    pub async fn process_message(&self, content: &str) -> ChatMessage {
        match self.request_reply(content).await {
            Ok(reply) => reply.into(),
            Err(e) => {
                warn!("Chat request failed, answering with fallback: {}", e);
                ChatMessage::bot_text(FALLBACK_REPLY)
            }
        }
    }
}

/// In-memory history of one chat, living as long as the value does.
///
/// `send` takes `&mut self`, so a conversation has at most one request in
/// flight.
pub struct Conversation {
    session: ChatSession,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            messages: vec![ChatMessage::bot_text(WELCOME_MESSAGE)],
        }
    }

    /// Appends the trimmed user message and the bot's answer. Blank input is
    /// ignored and returns `None`.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(content));
        let reply = self.session.process_message(content).await;
        self.messages.push(reply);
        self.messages.last()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{ChatRole, Product};

    struct StubTransport {
        reply: Option<ChatReply>,
        calls: AtomicUsize,
    }

    impl StubTransport {
        fn answering(reply: ChatReply) -> Self {
            Self {
                reply: Some(reply),
                calls: AtomicUsize::new(0),
            }
        }

        fn broken() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChatTransport for StubTransport {
        async fn send(&self, _message: &str) -> Result<ChatReply, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or_else(|| DomainError::transport("API request failed"))
        }
    }

    #[tokio::test]
    async fn success_becomes_bot_message_with_products() {
        let reply = ChatReply::new(
            "Try the lamp",
            vec![Product::new("p1", "Desk Lamp", "home", "Home", 999)],
        );
        let session = ChatSession::new(Arc::new(StubTransport::answering(reply)));

        let message = session.process_message("lamp?").await;

        assert_eq!(message.role(), ChatRole::Bot);
        assert_eq!(message.content(), "Try the lamp");
        assert_eq!(message.related_products().len(), 1);
    }

    #[tokio::test]
    async fn failure_becomes_fallback_message() {
        let session = ChatSession::new(Arc::new(StubTransport::broken()));

        let message = session.process_message("hello").await;

        assert_eq!(message.role(), ChatRole::Bot);
        assert_eq!(message.content(), FALLBACK_REPLY);
        assert!(!message.has_related_products());
    }

    #[tokio::test]
    async fn conversation_starts_with_welcome_and_appends_turns() {
        let transport = Arc::new(StubTransport::answering(ChatReply::new("Hi there", vec![])));
        let mut conversation = Conversation::new(ChatSession::new(transport.clone()));

        assert_eq!(conversation.messages()[0].content(), WELCOME_MESSAGE);

        let reply = conversation.send("  hello  ").await.unwrap();
        assert_eq!(reply.content(), "Hi there");

        let messages = conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role(), ChatRole::User);
        assert_eq!(messages[1].content(), "hello");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_input_is_not_sent() {
        let transport = Arc::new(StubTransport::broken());
        let mut conversation = Conversation::new(ChatSession::new(transport.clone()));

        assert!(conversation.send("   ").await.is_none());
        assert_eq!(conversation.len(), 1);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }
}
