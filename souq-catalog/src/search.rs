//! Lexical search and ranking over the product catalog.

use std::sync::Arc;

use tracing::info;

use crate::config::SearchConfig;
use crate::loader::CatalogLoader;
use crate::product::Product;

/// Filters, ranks, and truncates catalog products for a free-text query.
///
/// Matching is deliberately naive: the query is lowercased, trimmed, and
/// whitespace-split; a product qualifies when any token is a literal
/// substring of its lowercased name, category, or description. Ranking uses a
/// single signal (name starts with the whole normalized query) on top of a
/// stable sort, so equally ranked products keep catalog order.
///
/// Searches never fail: degenerate input and a failed catalog load both
/// produce an empty result.
pub struct SearchEngine {
    loader: Arc<CatalogLoader>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine with the default [`SearchConfig`].
    pub fn new(loader: Arc<CatalogLoader>) -> Self {
        Self { loader, config: SearchConfig::default() }
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(loader: Arc<CatalogLoader>, config: SearchConfig) -> Self {
        Self { loader, config }
    }

    /// Return a reference to the engine configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search with the configured default limit.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        self.search_with_limit(query, self.config.default_limit).await
    }

    /// Search, returning at most `limit` products by descending relevance.
    ///
    /// Queries that trim to fewer than `min_query_chars` chars return an
    /// empty result without touching the catalog, so near-empty input never
    /// triggers a fetch.
    pub async fn search_with_limit(&self, query: &str, limit: usize) -> Vec<Product> {
        let normalized = query.trim().to_lowercase();
        if normalized.chars().count() < self.config.min_query_chars {
            return Vec::new();
        }

        let catalog = self.loader.load().await;

        let tokens: Vec<&str> = normalized
            .split_whitespace()
            .filter(|token| token.chars().count() >= self.config.min_token_chars)
            .collect();

        let mut matches: Vec<&Product> =
            catalog.iter().filter(|product| Self::matches(product, &tokens)).collect();

        // Single ranking signal: whole-query name prefix. `sort_by_key` is
        // stable, which keeps catalog order among equally ranked products.
        matches.sort_by_key(|product| !product.name.to_lowercase().starts_with(&normalized));
        matches.truncate(limit);

        info!(query = %normalized, result_count = matches.len(), "catalog search completed");

        matches.into_iter().cloned().collect()
    }

    /// Whether any token appears in any of the product's text fields.
    fn matches(product: &Product, tokens: &[&str]) -> bool {
        if tokens.is_empty() {
            return false;
        }

        let name = product.name.to_lowercase();
        let category = product.category.to_lowercase();
        let description = product.description.to_lowercase();

        tokens.iter().any(|token| {
            name.contains(token) || category.contains(token) || description.contains(token)
        })
    }
}
