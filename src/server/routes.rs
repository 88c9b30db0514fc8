//! HTTP route handlers for the summarization API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::engine::{EngineError, StrategyPreference, SummaryMode, SummaryResult};
use crate::sources;

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/summarize", post(summarize))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "gist-engine",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Summarization request.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Raw text to summarize.
    pub text: Option<String>,
    /// URL to fetch and summarize instead of raw text.
    pub url: Option<String>,
    /// Summary verbosity.
    #[serde(default)]
    pub mode: SummaryMode,
    /// Preferred strategy.
    #[serde(default)]
    pub strategy: StrategyPreference,
    /// Credential for the remote strategy.
    pub api_key: Option<String>,
}

/// Handle summarization requests.
async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummaryResult>, (StatusCode, String)> {
    let text = resolve_text(&state, &request).await?;

    let result = state
        .engine
        .summarize(
            &text,
            request.mode,
            request.strategy,
            request.api_key.as_deref(),
        )
        .await
        .map_err(|e| match e {
            EngineError::InputEmpty => (StatusCode::BAD_REQUEST, e.to_string()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?;

    Ok(Json(result))
}

/// Resolve the source text from the request body.
async fn resolve_text(
    state: &AppState,
    request: &SummarizeRequest,
) -> Result<String, (StatusCode, String)> {
    if let Some(text) = &request.text {
        if !text.trim().is_empty() {
            return Ok(text.clone());
        }
    }

    if let Some(url) = &request.url {
        return sources::fetch_page_text(&state.http, url)
            .await
            .map_err(|e| (StatusCode::BAD_GATEWAY, format!("Fetch error: {e}")));
    }

    Err((
        StatusCode::BAD_REQUEST,
        "missing source text: provide 'text' or 'url'".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let raw = r#"{"text":"Some text."}"#;
        let request: SummarizeRequest =
            serde_json::from_str(raw).ok().unwrap_or_else(|| unreachable!());
        assert_eq!(request.mode, SummaryMode::Standard);
        assert_eq!(request.strategy, StrategyPreference::Local);
        assert!(request.api_key.is_none());
    }

    #[test]
    fn test_request_full_shape() {
        let raw = r#"{"url":"https://example.com","mode":"detailed","strategy":"remote","api_key":"k"}"#;
        let request: SummarizeRequest =
            serde_json::from_str(raw).ok().unwrap_or_else(|| unreachable!());
        assert_eq!(request.mode, SummaryMode::Detailed);
        assert_eq!(request.strategy, StrategyPreference::Remote);
        assert_eq!(request.url.as_deref(), Some("https://example.com"));
    }
}
