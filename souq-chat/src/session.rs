//! Per-conversation orchestration: search, model call, transcript.

use std::sync::Arc;

use souq_catalog::SearchEngine;
use souq_model::{ChatModel, ModelRequest, Turn, TurnRole};
use tracing::{error, info};

use crate::message::{Message, Role};

/// Reply recorded when the model call fails; the turn still completes.
const FALLBACK_REPLY: &str = "عذرًا، حدث خطأ أثناء الاتصال بالخادم. حاول مرة أخرى لاحقًا.";

/// One customer conversation.
///
/// Owns the ordered transcript and grows it by exactly two messages per
/// turn: the user message, then the assistant reply. Model failures are
/// absorbed into a fixed apology reply, so [`send`](ChatSession::send) never
/// fails and a broken upstream never loses the user's turn. The catalog is
/// only ever read, never written, from here.
pub struct ChatSession {
    engine: Arc<SearchEngine>,
    model: Arc<dyn ChatModel>,
    messages: Vec<Message>,
}

impl ChatSession {
    /// Create an empty session over the given search engine and model.
    pub fn new(engine: Arc<SearchEngine>, model: Arc<dyn ChatModel>) -> Self {
        Self { engine, model, messages: Vec::new() }
    }

    /// The full transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Run one user turn and return the assistant reply.
    ///
    /// The flow mirrors what the user sees: their message lands in the
    /// transcript immediately, catalog products are matched against its
    /// text, and the model answers with those products as grounding context.
    /// The matched products ride along on the reply as suggested cards.
    pub async fn send(&mut self, text: impl Into<String>, image: Option<String>) -> Message {
        let text = text.into();

        // History for the model is everything before this turn.
        let history: Vec<Turn> = self.messages.iter().map(turn_from_message).collect();

        self.messages.push(Message::user(text.clone(), image.clone()));

        let products = self.engine.search(&text).await;
        info!(product_count = products.len(), "matched catalog products for turn");

        let request = ModelRequest { text, image, products: products.clone() };
        let reply = match self.model.reply(&history, &request).await {
            Ok(reply_text) => Message::model(reply_text, products),
            Err(e) => {
                error!(error = %e, "model call failed, falling back to apology reply");
                Message::model(FALLBACK_REPLY, Vec::new())
            }
        };

        self.messages.push(reply.clone());
        reply
    }
}

fn turn_from_message(message: &Message) -> Turn {
    let role = match message.role {
        Role::User => TurnRole::User,
        Role::Model => TurnRole::Model,
    };
    Turn::new(role, message.text.clone())
}
