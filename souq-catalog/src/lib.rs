//! # souq-catalog
//!
//! Product catalog loading and lexical search for the souq-assist support bot.
//!
//! ## Overview
//!
//! This crate is the retrieval core that grounds bot replies with real
//! inventory data. It has two layered components:
//!
//! - [`CatalogLoader`] — fetches the product catalog from a [`CatalogSource`]
//!   once per process lifetime and memoizes it. Fetch failures are logged and
//!   surfaced as an empty catalog, never as an error.
//! - [`SearchEngine`] — tokenizes a free-text query, filters the catalog by
//!   token containment across name, category, and description, ranks matches
//!   by whole-query name prefix, and returns a bounded top slice.
//!
//! The catalog is small enough for a full scan per query; there is no index,
//! no stemming, and no fuzzy matching.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use souq_catalog::{CatalogLoader, HttpCatalogSource, SearchEngine};
//!
//! let source = Arc::new(HttpCatalogSource::new("https://shop.example/products.json"));
//! let loader = Arc::new(CatalogLoader::new(source));
//! let engine = SearchEngine::new(loader);
//!
//! let hits = engine.search("سماعة لاسلكية").await;
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod product;
pub mod search;
pub mod source;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use error::{CatalogError, Result};
pub use loader::{Catalog, CatalogLoader};
pub use product::Product;
pub use search::SearchEngine;
pub use source::{CatalogSource, FileCatalogSource, HttpCatalogSource};
