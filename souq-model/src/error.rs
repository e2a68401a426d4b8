//! Error types for the `souq-model` crate.

use thiserror::Error;

/// Errors that can occur when calling the language model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A configuration validation error (missing API key, bad model name).
    #[error("model configuration error: {0}")]
    Config(String),

    /// The model endpoint could not be reached.
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model API answered with a non-success status.
    #[error("model API returned status {status}: {message}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Error detail extracted from the response body, if any.
        message: String,
    },

    /// The model response could not be decoded.
    #[error("failed to decode model response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The model answered but produced no usable reply text.
    #[error("model returned no usable reply")]
    EmptyReply,
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
