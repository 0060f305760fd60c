use super::fallback;
use super::{ChatMessage, LanguageModel};
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::planner::FallbackPlanBuilder;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout as tokio_timeout;
use tracing::{debug, error, info, warn};

const EXCERPT_CHARS: usize = 300;

/// What the caller is asking for, used to shape fallback content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// A table of contents in the outline JSON schema
    Outline { topic: String, num_chapters: usize },
    /// Chapter prose as an HTML fragment
    Chapter { topic: String },
    General,
}

/// Front door to the model backend. Never fails: without a backend it returns
/// mock text, and backend errors turn into fallback or tagged error text.
pub struct LanguageModelClient {
    backend: Option<Arc<dyn LanguageModel>>,
    fallback: FallbackPlanBuilder,
}

impl LanguageModelClient {
    pub fn new(backend: Arc<dyn LanguageModel>) -> Self {
        Self {
            backend: Some(backend),
            fallback: FallbackPlanBuilder::new(),
        }
    }

    /// A client with no backend; every call returns mock text
    pub fn offline() -> Self {
        Self {
            backend: None,
            fallback: FallbackPlanBuilder::new(),
        }
    }

    /// Build the configured backend and probe it once
    pub async fn connect(config: &ProviderConfig) -> Self {
        let Some(backend) = super::create_backend(config) else {
            return Self::offline();
        };

        if backend.is_available().await {
            Self::new(backend)
        } else {
            warn!(
                "{} backend is not reachable, running in mock mode",
                backend.name()
            );
            Self::offline()
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Human-readable backend description for status output
    pub fn describe(&self) -> String {
        match &self.backend {
            Some(backend) => format!("{} ({})", backend.name(), backend.model()),
            None => "mock (offline)".to_string(),
        }
    }

    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        timeout: Duration,
        kind: &RequestKind,
    ) -> String {
        let Some(backend) = &self.backend else {
            warn!("Model backend not available, returning mock response");
            return format!("[MOCK]\n{}", excerpt(messages));
        };

        info!(
            "Calling {} with {} messages ({} chars)",
            backend.name(),
            messages.len(),
            messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let result = match tokio_timeout(timeout, backend.chat(messages, temperature)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(timeout)),
        };

        match result {
            Ok(text) => {
                let text = text.trim().to_string();
                info!("{} responded with {} chars", backend.name(), text.len());
                debug!(
                    "Response excerpt: {}",
                    text.chars().take(800).collect::<String>()
                );
                text
            }
            Err(e) if e.is_rate_limit() => {
                warn!("Rate limit exceeded, using fallback content: {}", e);
                fallback::synthesize(kind, &excerpt(messages), &self.fallback)
            }
            Err(e) => {
                error!("{} call failed: {}", backend.name(), e);
                format!(
                    "[LLM_ERROR: {}]\n{}",
                    flatten_braces(&e.to_string()),
                    excerpt(messages)
                )
            }
        }
    }
}

/// Error bodies are often JSON; keep them from being read back as a model reply
fn flatten_braces(message: &str) -> String {
    message.replace('{', "(").replace('}', ")")
}

fn excerpt(messages: &[ChatMessage]) -> String {
    let joined = messages
        .iter()
        .map(|m| format!("{}: {}", m.role.as_str(), m.content))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{} ...", joined.chars().take(EXCERPT_CHARS).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::testing::{ScriptedModel, StalledModel};

    fn messages() -> Vec<ChatMessage> {
        vec![ChatMessage::system("You plan books."), ChatMessage::user("Plan it")]
    }

    #[tokio::test]
    async fn test_offline_returns_mock() {
        let client = LanguageModelClient::offline();
        let text = client
            .complete(&messages(), 0.3, Duration::from_secs(1), &RequestKind::General)
            .await;
        assert!(text.starts_with("[MOCK]\nsystem: You plan books.\nuser: Plan it"));
        assert!(!client.is_available());
    }

    #[tokio::test]
    async fn test_mock_is_deterministic() {
        let client = LanguageModelClient::offline();
        let a = client
            .complete(&messages(), 0.3, Duration::from_secs(1), &RequestKind::General)
            .await;
        let b = client
            .complete(&messages(), 0.9, Duration::from_secs(1), &RequestKind::General)
            .await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_response_is_trimmed() {
        let model = ScriptedModel::replies(&["\n  {\"title\": \"x\"}  \n"]);
        let client = LanguageModelClient::new(model.clone());
        let text = client
            .complete(&messages(), 0.3, Duration::from_secs(1), &RequestKind::General)
            .await;
        assert_eq!(text, "{\"title\": \"x\"}");
        assert_eq!(model.call_count(), 1);
        assert_eq!(model.calls()[0], messages());
    }

    #[tokio::test]
    async fn test_rate_limit_outline_fallback() {
        let model = ScriptedModel::new(vec![Err(ProviderError::RateLimited("429".into()))]);
        let client = LanguageModelClient::new(model);
        let kind = RequestKind::Outline {
            topic: "Rust".to_string(),
            num_chapters: 2,
        };
        let text = client
            .complete(&messages(), 0.3, Duration::from_secs(1), &kind)
            .await;
        let expected = serde_json::to_string_pretty(&FallbackPlanBuilder::new().build("Rust", 2)).unwrap();
        assert_eq!(text, expected);
    }

    #[tokio::test]
    async fn test_rate_limit_chapter_fallback() {
        let model = ScriptedModel::new(vec![Err(ProviderError::Status {
            code: 429,
            body: "slow down".into(),
        })]);
        let client = LanguageModelClient::new(model);
        let kind = RequestKind::Chapter {
            topic: "Rust".to_string(),
        };
        let text = client
            .complete(&messages(), 0.7, Duration::from_secs(1), &kind)
            .await;
        assert!(text.starts_with("<h1>INTRODUCTION</h1>"));
    }

    #[tokio::test]
    async fn test_other_errors_are_tagged() {
        let model = ScriptedModel::new(vec![Err(ProviderError::Status {
            code: 500,
            body: "boom".into(),
        })]);
        let client = LanguageModelClient::new(model);
        let text = client
            .complete(&messages(), 0.3, Duration::from_secs(1), &RequestKind::General)
            .await;
        assert!(text.starts_with("[LLM_ERROR: Request failed with status 500: boom]\n"));
        assert!(text.contains("system: You plan books."));
    }

    #[tokio::test]
    async fn test_json_error_body_is_not_parseable() {
        let model = ScriptedModel::new(vec![Err(ProviderError::Status {
            code: 503,
            body: r#"{"error":{"message":"Service Unavailable"}}"#.into(),
        })]);
        let client = LanguageModelClient::new(model);
        let text = client
            .complete(&messages(), 0.3, Duration::from_secs(1), &RequestKind::General)
            .await;
        assert!(text.contains("Service Unavailable"));
        assert!(crate::parser::extract_json(&text).is_none());
    }

    #[tokio::test]
    async fn test_timeout_is_enforced() {
        let client = LanguageModelClient::new(Arc::new(StalledModel));
        let text = client
            .complete(&messages(), 0.3, Duration::from_millis(50), &RequestKind::General)
            .await;
        assert!(text.starts_with("[LLM_ERROR: Request timed out after"));
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let long = vec![ChatMessage::user("x".repeat(1000))];
        let text = excerpt(&long);
        assert_eq!(text.chars().count(), EXCERPT_CHARS + 4);
        assert!(text.ends_with(" ..."));
    }
}
