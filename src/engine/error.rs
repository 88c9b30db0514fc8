//! Error types for the summarization engine.

use thiserror::Error;

/// Summarization engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No text to summarize after trimming whitespace.
    #[error("no text to summarize")]
    InputEmpty,
    /// Remote strategy requested without a credential.
    #[error("remote credential missing")]
    CredentialMissing,
    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// HTTP transport failure while calling the completion provider.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Completion provider returned a non-success status.
    #[error("provider returned status {status}: {body}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
    /// Token pattern failed to compile.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
    /// URL parse error.
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

/// Convenience result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
