//! Error types for text acquisition.

use thiserror::Error;

/// Errors that can occur while acquiring source text.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// HTTP client configuration error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The fetched resource is not text.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// No usable text could be extracted.
    #[error("Content extraction failed: {0}")]
    ExtractionFailed(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
