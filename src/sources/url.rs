//! Paragraph text extraction from fetched web pages.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::sources::error::SourceError;

/// Container elements whose paragraphs are page chrome, not article text.
const CHROME_CONTAINERS: [&str; 6] = ["nav", "header", "footer", "aside", "script", "style"];

/// Fetch a URL and return its readable text.
///
/// Plain-text responses are returned as-is; HTML responses are reduced to
/// their paragraph text.
///
/// # Errors
/// Returns an error if the URL is invalid, the request fails, the content
/// type is not text, or no paragraph text can be extracted.
pub async fn fetch_page_text(client: &reqwest::Client, url: &str) -> Result<String, SourceError> {
    Url::parse(url)?;

    let response = client.get(url).send().await?.error_for_status()?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    if !content_type.contains("text/html") && !content_type.contains("text/plain") {
        return Err(SourceError::UnsupportedContentType(content_type));
    }

    let body = response.text().await?;
    if content_type.contains("text/plain") {
        return Ok(body.trim().to_string());
    }

    extract_paragraphs(&body)
}

/// Extract paragraph text from HTML, excluding paragraphs nested in page
/// chrome (nav, header, footer, aside) and non-content elements. Paragraphs
/// are joined with blank lines.
///
/// # Errors
/// Returns an error if the document contains no paragraph text.
pub fn extract_paragraphs(html: &str) -> Result<String, SourceError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p")
        .map_err(|e| SourceError::ExtractionFailed(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for element in document.select(&selector) {
        if inside_chrome(element) {
            continue;
        }
        let text = normalize_whitespace(&element.text().collect::<String>());
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    if paragraphs.is_empty() {
        return Err(SourceError::ExtractionFailed(
            "no paragraph text found in document".to_string(),
        ));
    }

    Ok(paragraphs.join("\n\n"))
}

/// Whether an element sits inside a chrome container.
fn inside_chrome(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| CHROME_CONTAINERS.contains(&ancestor.value().name()))
}

/// Collapse runs of whitespace into single spaces and trim.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_paragraphs_with_blank_line_separators() {
        let html = "<html><body><p>First paragraph.</p><p>Second\n  paragraph.</p></body></html>";
        let text = extract_paragraphs(html).ok().unwrap_or_default();
        assert_eq!(text, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_skips_nav_and_footer_paragraphs() {
        let html = "<html><body>\
                    <nav><p>Menu item</p></nav>\
                    <p>Article body.</p>\
                    <footer><p>Copyright notice</p></footer>\
                    </body></html>";
        let text = extract_paragraphs(html).ok().unwrap_or_default();
        assert_eq!(text, "Article body.");
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let html = "<html><body><div>no paragraphs here</div></body></html>";
        assert!(matches!(
            extract_paragraphs(html),
            Err(SourceError::ExtractionFailed(_))
        ));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
    }
}
