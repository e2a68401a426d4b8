//! Configuration for the search engine.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Tuning parameters for catalog search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Number of results returned when the caller does not pass a limit.
    pub default_limit: usize,
    /// Queries shorter than this (in chars, after trimming) are rejected
    /// without loading the catalog.
    pub min_query_chars: usize,
    /// Tokens shorter than this (in chars) never participate in matching.
    pub min_token_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { default_limit: 5, min_query_chars: 2, min_token_chars: 2 }
    }
}

impl SearchConfig {
    /// Create a new builder for constructing a [`SearchConfig`].
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`SearchConfig`].
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Set the default result limit.
    pub fn default_limit(mut self, limit: usize) -> Self {
        self.config.default_limit = limit;
        self
    }

    /// Set the minimum trimmed query length in chars.
    pub fn min_query_chars(mut self, chars: usize) -> Self {
        self.config.min_query_chars = chars;
        self
    }

    /// Set the minimum token length in chars.
    pub fn min_token_chars(mut self, chars: usize) -> Self {
        self.config.min_token_chars = chars;
        self
    }

    /// Build the [`SearchConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if `default_limit` or
    /// `min_query_chars` is zero.
    pub fn build(self) -> Result<SearchConfig> {
        if self.config.default_limit == 0 {
            return Err(CatalogError::Config("default_limit must be greater than zero".to_string()));
        }
        if self.config.min_query_chars == 0 {
            return Err(CatalogError::Config(
                "min_query_chars must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
