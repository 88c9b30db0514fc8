//! Shared application state for the HTTP server.

use std::sync::Arc;

use crate::engine::{RemoteConfig, SummarizationEngine};
use crate::sources;

/// Shared state handed to every request handler.
pub struct AppState {
    /// The summarization engine.
    pub engine: SummarizationEngine,
    /// HTTP client for URL sources.
    pub http: reqwest::Client,
}

impl AppState {
    /// Create application state with environment-derived remote settings.
    ///
    /// # Errors
    /// Returns an error if the engine or the HTTP client cannot be built.
    pub fn new() -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        Self::with_config(RemoteConfig::from_env())
    }

    /// Create application state with explicit remote settings.
    ///
    /// # Errors
    /// Returns an error if the engine or the HTTP client cannot be built.
    pub fn with_config(
        config: RemoteConfig,
    ) -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let engine = SummarizationEngine::new(config)?;
        let http = sources::build_client()?;
        Ok(Arc::new(Self { engine, http }))
    }
}
