use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::domain::ChatMessage;
use crate::{ChatSession, Conversation, HttpChatTransport};

use super::catalog_controller::format_product_line;

/// Talks to a running storefront's chat endpoint from the terminal.
pub struct ChatController {
    endpoint: String,
}

impl ChatController {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn session(&self) -> ChatSession {
        ChatSession::new(Arc::new(HttpChatTransport::new(&self.endpoint)))
    }

    /// One question, one answer. Failures print the fallback reply.
    pub async fn ask(&self, message: &str) -> Result<String> {
        let reply = self.session().process_message(message).await;
        Ok(format_bot_message(&reply))
    }

    /// Reads questions from stdin until EOF or `/quit`.
    pub async fn interactive(&self) -> Result<()> {
        let mut conversation = Conversation::new(self.session());
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        if let Some(welcome) = conversation.messages().first() {
            stdout
                .write_all(format!("{}\n", format_bot_message(welcome)).as_bytes())
                .await?;
        }

        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim() == "/quit" {
                break;
            }

            if let Some(reply) = conversation.send(&line).await {
                stdout
                    .write_all(format!("{}\n", format_bot_message(reply)).as_bytes())
                    .await?;
            }
        }

        Ok(())
    }
}

fn format_bot_message(message: &ChatMessage) -> String {
    let mut output = format!("assistant: {}\n", message.content());
    if message.has_related_products() {
        output.push_str("\nRelated products:\n");
        for product in message.related_products() {
            output.push_str(&format_product_line(product));
            output.push('\n');
        }
    }
    output
}
