//! The chat-model trait and its request types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use souq_catalog::Product;

use crate::error::Result;

/// Role of a prior conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Authored by the customer.
    User,
    /// Authored by the assistant.
    Model,
}

/// A prior conversation turn, reduced to plain text.
///
/// Images and product cards from earlier turns are not replayed; only the
/// text survives into model context.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// Who authored the turn.
    pub role: TurnRole,
    /// The turn's text content.
    pub text: String,
}

impl Turn {
    /// Convenience constructor.
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self { role, text: text.into() }
    }
}

/// The current user turn, as handed to a [`ChatModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    /// The user's message text.
    pub text: String,
    /// Optional photo attachment as a base64 data URL.
    pub image: Option<String>,
    /// Catalog products matched against the message text. Serialized into
    /// the prompt as grounding context; may be empty.
    pub products: Vec<Product>,
}

/// A language model that answers one user turn at a time.
///
/// Implementations receive the prior turns plus the current request and
/// return plain reply text. They must not mutate any shared state; a failed
/// call leaves the conversation unchanged.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a reply for the current user turn.
    async fn reply(&self, history: &[Turn], request: &ModelRequest) -> Result<String>;
}
