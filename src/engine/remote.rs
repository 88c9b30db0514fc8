//! Remote completion-backed summarization.
//!
//! Issues exactly one chat-completion request, no retries and no streaming.
//! A response whose content is not the expected JSON shape degrades softly
//! to a plain-text summary; only transport and provider failures are
//! errors, and those are what the orchestrator falls back on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::config::RemoteConfig;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::types::{SummaryMode, SummaryResult};

/// Strategy seam for the remote path, so the orchestrator (and tests) can
/// swap the HTTP-backed implementation.
#[async_trait]
pub trait RemoteStrategy: Send + Sync {
    /// Summarize a document through the remote provider.
    ///
    /// # Errors
    /// Returns `CredentialMissing`, `Transport`, or `Provider` errors; a
    /// malformed response body is NOT an error.
    async fn summarize(
        &self,
        document: &str,
        mode: SummaryMode,
        credential: &str,
    ) -> EngineResult<SummaryResult>;
}

/// HTTP-backed remote summarizer.
pub struct RemoteSummarizer {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteSummarizer {
    /// Create a remote summarizer from config.
    ///
    /// # Errors
    /// Returns an error if the config is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: RemoteConfig) -> EngineResult<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.request_timeout_seconds,
            ))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl RemoteStrategy for RemoteSummarizer {
    async fn summarize(
        &self,
        document: &str,
        mode: SummaryMode,
        credential: &str,
    ) -> EngineResult<SummaryResult> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(EngineError::CredentialMissing);
        }

        let prompt = build_prompt(document, mode);
        let request = CompletionRequest {
            model: &self.config.model,
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %self.config.model, %mode, "requesting remote summary");

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let payload: CompletionResponse = response.json().await?;
        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.and_then(|m| m.content).or(choice.text))
            .unwrap_or_default();

        Ok(parse_structured(&content))
    }
}

/// Build the single user prompt sent to the provider.
fn build_prompt(document: &str, mode: SummaryMode) -> String {
    format!(
        "Summarize the following text. Respond with a single JSON object with \
         fields \"summary\" (a {mode} prose summary), \"keywords\" (a \
         comma-separated list of the most important terms), and \"highlights\" \
         (an array of the 3 most important sentences, quoted from the text). \
         Return only the JSON object.\n\nText:\n{document}"
    )
}

/// Parse provider content as a structured summary; fall back to treating the
/// whole text as the summary when it is not the expected shape.
fn parse_structured(content: &str) -> SummaryResult {
    let trimmed = content.trim();
    let candidate = strip_code_fence(trimmed);
    match serde_json::from_str::<ProviderPayload>(candidate) {
        Ok(payload) => SummaryResult {
            summary: payload.summary,
            keywords: payload.keywords.into_list(),
            highlights: payload.highlights,
        },
        Err(_) => SummaryResult {
            summary: trimmed.to_string(),
            keywords: Vec::new(),
            highlights: Vec::new(),
        },
    }
}

/// Drop a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Skip an optional language tag on the fence line.
    let rest = rest.split_once('\n').map_or(rest, |(_, body)| body);
    rest.strip_suffix("```").map_or(rest, str::trim).trim()
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Expected shape of the provider's JSON content.
#[derive(Deserialize)]
struct ProviderPayload {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    keywords: KeywordField,
    #[serde(default)]
    highlights: Vec<String>,
}

/// The prompt asks for comma-separated keywords, but providers sometimes
/// return an array anyway; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordField {
    Joined(String),
    List(Vec<String>),
}

impl Default for KeywordField {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl KeywordField {
    fn into_list(self) -> Vec<String> {
        match self {
            Self::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect(),
            Self::List(list) => list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_mode_and_document() {
        let prompt = build_prompt("Some document text.", SummaryMode::Concise);
        assert!(prompt.contains("concise"));
        assert!(prompt.contains("Some document text."));
        assert!(prompt.contains("\"keywords\""));
    }

    #[test]
    fn test_parses_structured_content() {
        let content = r#"{"summary":"A gist.","keywords":"rust, tokio","highlights":["One.","Two.","Three."]}"#;
        let result = parse_structured(content);
        assert_eq!(result.summary, "A gist.");
        assert_eq!(result.keywords, vec!["rust", "tokio"]);
        assert_eq!(result.highlights.len(), 3);
    }

    #[test]
    fn test_accepts_keyword_array() {
        let content = r#"{"summary":"A gist.","keywords":["rust","tokio"],"highlights":[]}"#;
        let result = parse_structured(content);
        assert_eq!(result.keywords, vec!["rust", "tokio"]);
    }

    #[test]
    fn test_degrades_free_text_to_summary() {
        let result = parse_structured("Here is a summary in prose, not JSON.");
        assert_eq!(result.summary, "Here is a summary in prose, not JSON.");
        assert!(result.keywords.is_empty());
        assert!(result.highlights.is_empty());
    }

    #[test]
    fn test_strips_code_fence() {
        let content = "```json\n{\"summary\":\"Fenced.\",\"keywords\":\"\",\"highlights\":[]}\n```";
        let result = parse_structured(content);
        assert_eq!(result.summary, "Fenced.");
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_completion_response_shape() {
        let raw = r#"{"choices":[{"message":{"content":"hello"}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(raw).ok().unwrap_or_else(|| unreachable!());
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.and_then(|m| m.content).or(c.text));
        assert_eq!(content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_completion_response_text_fallback() {
        let raw = r#"{"choices":[{"text":"legacy"}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(raw).ok().unwrap_or_else(|| unreachable!());
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.and_then(|m| m.content).or(c.text));
        assert_eq!(content.as_deref(), Some("legacy"));
    }

    #[test]
    fn test_empty_credential_is_rejected() {
        let summarizer = RemoteSummarizer::new(RemoteConfig::default());
        assert!(summarizer.is_ok());
        let summarizer = match summarizer {
            Ok(s) => s,
            Err(_) => return,
        };
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .ok()
            .unwrap_or_else(|| unreachable!());
        let outcome = rt.block_on(summarizer.summarize("text", SummaryMode::Standard, "  "));
        assert!(matches!(outcome, Err(EngineError::CredentialMissing)));
    }
}
