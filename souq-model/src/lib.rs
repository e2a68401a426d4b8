//! # souq-model
//!
//! Language-model client for the souq-assist support bot.
//!
//! ## Overview
//!
//! The bot forwards each user turn — conversation history, current text, an
//! optional photo, and the catalog products matched by `souq-catalog` — to a
//! language model and renders the reply. This crate provides:
//!
//! - [`ChatModel`] — the async trait the orchestration layer calls.
//! - [`GeminiChatModel`] — a client for the Gemini `generateContent` API.
//! - [`MockChatModel`] — a canned-reply double for tests.
//! - [`context`] — prompt assembly: the product grounding block appended to
//!   the user text, and data-URL handling for photo attachments.
//!
//! The matched products are an *input* here; nothing in this crate feeds back
//! into the search core.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use souq_model::{ChatModel, GeminiChatModel, ModelRequest};
//!
//! let model = GeminiChatModel::from_env()?;
//! let request = ModelRequest { text: "عندكم سماعات؟".into(), image: None, products };
//! let reply = model.reply(&history, &request).await?;
//! ```

pub mod context;
pub mod error;
pub mod gemini;
pub mod mock;
pub mod model;

pub use error::{ModelError, Result};
pub use gemini::GeminiChatModel;
pub use mock::{MockChatModel, RecordedCall};
pub use model::{ChatModel, ModelRequest, Turn, TurnRole};
