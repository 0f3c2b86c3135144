//! Model client error types.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while talking to the Gemini API.
#[derive(Debug, Error)]
pub enum ModelError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("model API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The API answered without any candidates.
    #[error("model returned no candidates")]
    NoCandidates,

    /// Failed to parse the response body.
    #[error("failed to parse model response: {0}")]
    ParseError(String),
}
