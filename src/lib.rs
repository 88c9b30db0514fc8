//! Extractive and LLM-backed text summarization.
//!
//! The core is a deterministic extractive pipeline (segmentation,
//! term-frequency ranking, sentence scoring and selection) with an optional
//! remote completion strategy that falls back to the local pipeline on any
//! failure. Everything around it — URL/file text acquisition, flat-text
//! reports, the HTTP API — is thin glue feeding text in and results out.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

/// Command-line entrypoint helpers.
pub mod cli;
/// Summarization engine: segmentation, scoring, selection, orchestration.
pub mod engine;
/// Flat-text report rendering.
pub mod report;
/// HTTP server and API routes.
pub mod server;
/// Raw text acquisition (URL, file, stdin).
pub mod sources;

pub use engine::{
    EngineError, EngineResult, RemoteConfig, StrategyPreference, SummarizationEngine, SummaryMode,
    SummaryResult,
};
pub use sources::SourceError;
