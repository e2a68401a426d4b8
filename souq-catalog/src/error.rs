//! Error types for the `souq-catalog` crate.

use thiserror::Error;

/// Errors that can occur while fetching or decoding a catalog.
///
/// These never cross the search boundary: the loader converts every variant
/// into a logged empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog endpoint could not be reached.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog endpoint answered with a non-success status.
    #[error("catalog request returned status {status}")]
    Status {
        /// HTTP status code of the failed response.
        status: u16,
    },

    /// The catalog payload could not be decoded as a product array.
    #[error("catalog decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("catalog file error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration validation error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A convenience result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
