//! # souq-chat
//!
//! Conversation state and per-turn orchestration for the souq-assist support
//! bot.
//!
//! ## Overview
//!
//! A [`ChatSession`] owns the message transcript and runs the flow behind
//! every user turn: record the user message, match catalog products against
//! its text via `souq-catalog`, hand history + text + photo + products to the
//! `souq-model` client, and record the reply with the matched products
//! attached as suggested cards.
//!
//! The session produces data only — rendering bubbles, cards, and typing
//! indicators is the embedding UI's job.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use souq_catalog::{CatalogLoader, HttpCatalogSource, SearchEngine};
//! use souq_chat::ChatSession;
//! use souq_model::GeminiChatModel;
//!
//! let loader = Arc::new(CatalogLoader::new(Arc::new(
//!     HttpCatalogSource::new("https://shop.example/products.json"),
//! )));
//! let engine = Arc::new(SearchEngine::new(loader));
//! let model = Arc::new(GeminiChatModel::from_env()?);
//!
//! let mut session = ChatSession::new(engine, model);
//! let reply = session.send("عندكم سماعات؟", None).await;
//! println!("{} ({} cards)", reply.text, reply.suggested_products.len());
//! ```

pub mod message;
pub mod session;

pub use message::{Message, Role};
pub use session::ChatSession;
