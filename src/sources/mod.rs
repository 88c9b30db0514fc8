//! Raw text acquisition for the summarization engine.
//!
//! The engine only ever receives a single text string; these collaborators
//! produce it from a URL, a plain-text file, or standard input.

pub mod error;
pub mod file;
pub mod url;

pub use error::SourceError;
pub use file::{read_stdin, read_text_file};
pub use url::{extract_paragraphs, fetch_page_text};

use std::time::Duration;

/// Request timeout for page fetches.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Connect timeout for page fetches.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build an HTTP client suitable for fetching article pages.
///
/// # Errors
/// Returns an error if the client cannot be created.
pub fn build_client() -> Result<reqwest::Client, SourceError> {
    use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("gist-engine/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,text/plain;q=0.9,*/*;q=0.8"),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
        .map_err(|e| SourceError::HttpClient(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(build_client().is_ok());
    }
}
