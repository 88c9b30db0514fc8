//! Shared types for the summarization engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A sentence and its starting byte offset in the source document.
///
/// Created once by the segmenter and read-only afterwards. Document order
/// is defined by ascending `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceSpan {
    /// Sentence text, including its terminator when present.
    pub text: String,
    /// Byte offset of the sentence start in the source document.
    pub start: usize,
}

/// Verbosity of the produced summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Keep only the strongest sentences (3% of the document).
    Concise,
    /// Balanced retention (8% of the document).
    #[default]
    Standard,
    /// Generous retention (20% of the document).
    Detailed,
}

impl SummaryMode {
    /// Retention fraction and minimum sentence count for this mode.
    pub(crate) const fn retention(self) -> (f64, usize) {
        match self {
            Self::Concise => (0.03, 1),
            Self::Standard => (0.08, 2),
            Self::Detailed => (0.20, 3),
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Concise => "concise",
            Self::Standard => "standard",
            Self::Detailed => "detailed",
        };
        f.write_str(label)
    }
}

impl FromStr for SummaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concise" => Ok(Self::Concise),
            "standard" => Ok(Self::Standard),
            "detailed" => Ok(Self::Detailed),
            other => Err(format!(
                "unknown summary mode '{other}' (expected concise, standard, or detailed)"
            )),
        }
    }
}

/// Which summarization strategy the caller prefers.
///
/// The credential travels separately, per invocation; a remote preference
/// without a credential silently resolves to the local pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyPreference {
    /// Deterministic extractive pipeline, no network.
    #[default]
    Local,
    /// Remote completion provider, falling back to local on failure.
    Remote,
}

/// The engine's single output contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Selected sentences joined in document order.
    pub summary: String,
    /// Ranked keywords, at most twelve.
    pub keywords: Vec<String>,
    /// Selected sentences in document order, exposed individually.
    pub highlights: Vec<String>,
}
