//! Extractive sentence selection.
//!
//! Scores every sentence, keeps the top slice for the requested mode, and
//! re-orders the kept sentences to original document order before joining.

use std::cmp::Ordering;

use crate::engine::score::score_sentence;
use crate::engine::segment::Segmenter;
use crate::engine::types::{SentenceSpan, SummaryMode, SummaryResult};

/// Maximum number of keywords exposed in the result.
pub const KEYWORD_LIMIT: usize = 12;

/// A sentence paired with its score; transient, selection-time only.
struct ScoredSentence {
    start: usize,
    text: String,
    score: f64,
}

/// Select summary sentences for the requested mode.
///
/// Blank sentences are filtered here, not at segmentation time. The kept
/// sentences are re-sorted by start offset so the output mirrors the source
/// document regardless of score order; ties keep the first-occurring
/// sentence.
#[must_use]
pub fn select(
    segmenter: &Segmenter,
    sentences: &[SentenceSpan],
    top_terms: &[String],
    mode: SummaryMode,
) -> SummaryResult {
    let keywords: Vec<String> = top_terms.iter().take(KEYWORD_LIMIT).cloned().collect();

    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .filter(|s| !s.text.trim().is_empty())
        .map(|s| ScoredSentence {
            start: s.start,
            text: s.text.trim().to_string(),
            score: score_sentence(&segmenter.tokens(&s.text), top_terms),
        })
        .collect();

    let n = scored.len();
    if n == 0 {
        return SummaryResult {
            summary: String::new(),
            keywords,
            highlights: Vec::new(),
        };
    }

    // Stable sort: equal scores preserve document order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let k = keep_count(n, mode);
    let mut picked: Vec<ScoredSentence> = scored.into_iter().take(k).collect();
    picked.sort_by_key(|s| s.start);

    let highlights: Vec<String> = picked.into_iter().map(|s| s.text).collect();
    let summary = highlights.join(" ");

    SummaryResult {
        summary,
        keywords,
        highlights,
    }
}

/// Number of sentences to keep for `n` candidates under `mode`, clamped to
/// `[1, n]`.
fn keep_count(n: usize, mode: SummaryMode) -> usize {
    let (fraction, floor) = mode.retention();
    let rounded = (n as f64 * fraction).round() as usize;
    rounded.max(floor).clamp(1, n)
}
