//! Summarization engine: extractive core, remote strategy, orchestration.
//!
//! This module is organized into:
//! - `segment`: sentence and token segmentation
//! - `frequency`: term-frequency table and top-term ranking
//! - `score`: sentence scoring against the top terms
//! - `select`: extractive selection and result assembly
//! - `remote`: LLM-backed strategy over a chat-completions endpoint
//! - `config`: remote provider settings
//! - `error`: engine error taxonomy
//! - `types`: spans, modes, preferences, and the result contract
//!
//! [`SummarizationEngine`] is the orchestrator: it picks the strategy per
//! invocation and guarantees a result for any non-empty document, because
//! the local pipeline has no failure modes and every remote failure falls
//! back to it.

pub mod config;
pub mod error;
pub mod frequency;
pub mod remote;
pub mod score;
pub mod segment;
pub mod select;
pub mod types;

pub use config::RemoteConfig;
pub use error::{EngineError, EngineResult};
pub use frequency::{STOPWORDS, TOP_TERM_COUNT, TermFrequencyTable};
pub use remote::{RemoteStrategy, RemoteSummarizer};
pub use score::score_sentence;
pub use segment::{Segmented, Segmenter};
pub use select::{KEYWORD_LIMIT, select};
pub use types::{SentenceSpan, StrategyPreference, SummaryMode, SummaryResult};

use tracing::{debug, warn};

/// Top-level summarization service.
///
/// Holds the compiled segmenter and the remote strategy; each call is an
/// independent operation over its own document, with no shared mutable
/// state.
pub struct SummarizationEngine {
    segmenter: Segmenter,
    remote: Box<dyn RemoteStrategy>,
}

impl SummarizationEngine {
    /// Create an engine with an HTTP-backed remote strategy.
    ///
    /// # Errors
    /// Returns an error if the config is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: RemoteConfig) -> EngineResult<Self> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            remote: Box::new(RemoteSummarizer::new(config)?),
        })
    }

    /// Create an engine with default remote settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_defaults() -> EngineResult<Self> {
        Self::new(RemoteConfig::default())
    }

    /// Create an engine with a custom remote strategy.
    ///
    /// # Errors
    /// Returns an error if the token pattern fails to compile.
    pub fn with_remote(remote: Box<dyn RemoteStrategy>) -> EngineResult<Self> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            remote,
        })
    }

    /// Run the local extractive pipeline. Always succeeds for non-empty
    /// input.
    ///
    /// # Errors
    /// Returns `InputEmpty` if the document is blank after trimming.
    pub fn summarize_local(
        &self,
        document: &str,
        mode: SummaryMode,
    ) -> EngineResult<SummaryResult> {
        let document = document.trim();
        if document.is_empty() {
            return Err(EngineError::InputEmpty);
        }

        let Segmented {
            mut sentences,
            tokens,
        } = self.segmenter.segment(document);

        // A document of bare terminators has no sentence runs; treat the
        // whole text as one sentence so the result is never empty.
        if sentences.iter().all(|s| s.text.trim().is_empty()) {
            sentences = vec![SentenceSpan {
                text: document.to_string(),
                start: 0,
            }];
        }

        let table = TermFrequencyTable::build(&tokens);
        let top = table.top_terms(TOP_TERM_COUNT);
        Ok(select(&self.segmenter, &sentences, &top, mode))
    }

    /// Summarize a document with the preferred strategy.
    ///
    /// A remote preference without a credential silently uses the local
    /// pipeline; a remote preference whose call fails logs the failure and
    /// falls back to the local pipeline. The caller only ever sees a
    /// result or an input-validation error.
    ///
    /// # Errors
    /// Returns `InputEmpty` if the document is blank after trimming.
    pub async fn summarize(
        &self,
        document: &str,
        mode: SummaryMode,
        preference: StrategyPreference,
        credential: Option<&str>,
    ) -> EngineResult<SummaryResult> {
        let trimmed = document.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InputEmpty);
        }

        match preference {
            StrategyPreference::Local => self.summarize_local(trimmed, mode),
            StrategyPreference::Remote => {
                let credential = credential.unwrap_or_default().trim();
                if credential.is_empty() {
                    debug!("no remote credential supplied; using local pipeline");
                    return self.summarize_local(trimmed, mode);
                }

                match self.remote.summarize(trimmed, mode, credential).await {
                    Ok(result) => Ok(result),
                    Err(err) => {
                        warn!("remote summarization failed: {err}; falling back to local pipeline");
                        self.summarize_local(trimmed, mode)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    const DOCUMENT: &str =
        "Cats are great. Dogs are loyal. Birds can fly. Fish swim well.";

    struct FailingRemote;

    #[async_trait]
    impl RemoteStrategy for FailingRemote {
        async fn summarize(
            &self,
            _document: &str,
            _mode: SummaryMode,
            _credential: &str,
        ) -> EngineResult<SummaryResult> {
            Err(EngineError::Provider {
                status: 500,
                body: "upstream exploded".to_string(),
            })
        }
    }

    struct CannedRemote;

    #[async_trait]
    impl RemoteStrategy for CannedRemote {
        async fn summarize(
            &self,
            _document: &str,
            _mode: SummaryMode,
            _credential: &str,
        ) -> EngineResult<SummaryResult> {
            Ok(SummaryResult {
                summary: "remote summary".to_string(),
                keywords: vec!["remote".to_string()],
                highlights: vec!["remote highlight".to_string()],
            })
        }
    }

    fn engine_with(remote: Box<dyn RemoteStrategy>) -> SummarizationEngine {
        SummarizationEngine::with_remote(remote)
            .ok()
            .unwrap_or_else(|| unreachable!())
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let engine = engine_with(Box::new(CannedRemote));
        let outcome = engine
            .summarize("   \n\t  ", SummaryMode::Standard, StrategyPreference::Local, None)
            .await;
        assert!(matches!(outcome, Err(EngineError::InputEmpty)));
    }

    #[tokio::test]
    async fn test_local_preference_runs_local_pipeline() {
        let engine = engine_with(Box::new(CannedRemote));
        let result = engine
            .summarize(DOCUMENT, SummaryMode::Concise, StrategyPreference::Local, None)
            .await
            .ok()
            .unwrap_or_else(|| unreachable!());
        assert_eq!(result.summary, "Birds can fly.");
    }

    #[tokio::test]
    async fn test_remote_without_credential_matches_local() {
        let engine = engine_with(Box::new(CannedRemote));
        let local = engine
            .summarize(DOCUMENT, SummaryMode::Standard, StrategyPreference::Local, None)
            .await;
        let remote = engine
            .summarize(DOCUMENT, SummaryMode::Standard, StrategyPreference::Remote, None)
            .await;
        assert_eq!(local.ok(), remote.ok());

        let blank = engine
            .summarize(DOCUMENT, SummaryMode::Standard, StrategyPreference::Remote, Some("  "))
            .await;
        let local_again = engine
            .summarize(DOCUMENT, SummaryMode::Standard, StrategyPreference::Local, None)
            .await;
        assert_eq!(blank.ok(), local_again.ok());
    }

    #[tokio::test]
    async fn test_remote_with_credential_uses_remote() {
        let engine = engine_with(Box::new(CannedRemote));
        let result = engine
            .summarize(DOCUMENT, SummaryMode::Standard, StrategyPreference::Remote, Some("key"))
            .await
            .ok()
            .unwrap_or_else(|| unreachable!());
        assert_eq!(result.summary, "remote summary");
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_local() {
        let engine = engine_with(Box::new(FailingRemote));
        let fallback = engine
            .summarize(DOCUMENT, SummaryMode::Concise, StrategyPreference::Remote, Some("key"))
            .await;
        let local = engine.summarize_local(DOCUMENT, SummaryMode::Concise);
        assert!(fallback.is_ok());
        assert_eq!(fallback.ok(), local.ok());
    }

    #[tokio::test]
    async fn test_local_pipeline_is_idempotent() {
        let engine = engine_with(Box::new(CannedRemote));
        let first = engine.summarize_local(DOCUMENT, SummaryMode::Detailed);
        let second = engine.summarize_local(DOCUMENT, SummaryMode::Detailed);
        assert_eq!(first.ok(), second.ok());
    }

    #[test]
    fn test_terminator_only_document_still_summarizes() {
        let engine = engine_with(Box::new(CannedRemote));
        let result = engine.summarize_local("...", SummaryMode::Concise);
        let result = result.ok().unwrap_or_else(|| unreachable!());
        assert!(!result.summary.is_empty());
        assert_eq!(result.highlights.len(), 1);
    }
}
