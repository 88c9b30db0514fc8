//! Flat-text rendering of a summary result.
//!
//! Presentation only; the engine's output contract stays structured.

use std::path::Path;

use crate::engine::SummaryResult;

/// Render a result as a flat text report with `Summary:`, `Keywords:`, and
/// `Highlights:` sections.
#[must_use]
pub fn render(result: &SummaryResult) -> String {
    let mut out = String::new();

    out.push_str("Summary:\n");
    out.push_str(&result.summary);
    out.push('\n');

    out.push_str("\nKeywords:\n");
    out.push_str(&result.keywords.join(", "));
    out.push('\n');

    out.push_str("\nHighlights:\n");
    for highlight in &result.highlights {
        out.push_str("- ");
        out.push_str(highlight);
        out.push('\n');
    }

    out
}

/// Write the rendered report to a file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write(path: &Path, result: &SummaryResult) -> std::io::Result<()> {
    std::fs::write(path, render(result))
}
