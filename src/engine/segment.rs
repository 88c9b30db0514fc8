//! Sentence and token segmentation.
//!
//! Sentences are maximal runs of text up to and including a `.`, `!`, or `?`
//! terminator; a document without any terminator is a single sentence.
//! Tokens are lower-cased runs of word characters or apostrophes of length
//! three or more, kept in stream order with repetitions.

use regex::Regex;

use crate::engine::types::SentenceSpan;

/// Token pattern: word characters or apostrophes, three or more of them.
const TOKEN_PATTERN: &str = r"[\w']{3,}";

/// Output of segmenting a document.
#[derive(Clone, Debug)]
pub struct Segmented {
    /// Sentences in document order, raw (possibly blank after trimming).
    pub sentences: Vec<SentenceSpan>,
    /// Normalized word tokens in stream order.
    pub tokens: Vec<String>,
}

/// Splits raw text into sentences and normalized word tokens.
pub struct Segmenter {
    token_re: Regex,
}

impl Segmenter {
    /// Create a segmenter with the fixed token pattern.
    ///
    /// # Errors
    /// Returns an error if the token pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            token_re: Regex::new(TOKEN_PATTERN)?,
        })
    }

    /// Segment a document into sentences and tokens. Never fails.
    #[must_use]
    pub fn segment(&self, text: &str) -> Segmented {
        Segmented {
            sentences: split_sentences(text),
            tokens: self.tokens(text),
        }
    }

    /// Tokenize text: lower-case it and collect every pattern match.
    #[must_use]
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Split text on sentence terminators, keeping each terminator with its
/// sentence and recording the start offset of every span.
fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            let end = idx + ch.len_utf8();
            if start < idx {
                spans.push(SentenceSpan {
                    text: text[start..end].to_string(),
                    start,
                });
            }
            start = end;
        }
    }
    if start < text.len() {
        spans.push(SentenceSpan {
            text: text[start..].to_string(),
            start,
        });
    }
    spans
}
