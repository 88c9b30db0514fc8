//! Configuration for the summarization engine.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::engine::error::{EngineError, EngineResult};

/// Environment variable overriding the completion model name.
pub const MODEL_ENV: &str = "GIST_MODEL";
/// Environment variable overriding the completion endpoint.
pub const ENDPOINT_ENV: &str = "GIST_ENDPOINT";

/// Remote completion provider settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Completion model name.
    pub model: String,
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Token budget for the completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Whole-request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            max_tokens: 600,
            temperature: 0.2,
            request_timeout_seconds: 60,
        }
    }
}

impl RemoteConfig {
    /// Build a config from defaults plus environment overrides.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }
        config
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range or invalid.
    pub fn validate(&self) -> EngineResult<()> {
        if self.model.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "model must not be empty".to_string(),
            ));
        }

        if self.max_tokens == 0 {
            return Err(EngineError::InvalidConfig(
                "max_tokens must be > 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(EngineError::InvalidConfig(
                "temperature must be within [0, 2]".to_string(),
            ));
        }

        if self.request_timeout_seconds == 0 {
            return Err(EngineError::InvalidConfig(
                "request_timeout_seconds must be > 0".to_string(),
            ));
        }

        Url::parse(&self.endpoint)?;

        Ok(())
    }
}
