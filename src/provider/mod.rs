//! Language model backends and the client the pipeline talks to

mod client;
mod fallback;
mod groq;
mod ollama;

pub use client::{LanguageModelClient, RequestKind};
pub use groq::GroqBackend;
pub use ollama::OllamaBackend;

use crate::config::{ProviderConfig, ProviderKind};
use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A text-generation backend
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &'static str;

    fn model(&self) -> &str;

    /// Whether the backend can serve requests right now
    async fn is_available(&self) -> bool;

    /// Send the messages and return the raw response text
    async fn chat(&self, messages: &[ChatMessage], temperature: f32) -> Result<String, ProviderError>;
}

/// Create the configured backend, or `None` when it cannot be used (e.g. no API key)
pub fn create_backend(config: &ProviderConfig) -> Option<Arc<dyn LanguageModel>> {
    let result = match config.kind {
        ProviderKind::Groq => {
            let api_key = match std::env::var(&config.api_key_env) {
                Ok(key) if !key.trim().is_empty() => key,
                _ => {
                    warn!(
                        "No {} provided, running in mock mode",
                        config.api_key_env
                    );
                    return None;
                }
            };
            GroqBackend::new(config.model(), api_key, config.base_url())
                .map(|b| Arc::new(b) as Arc<dyn LanguageModel>)
        }
        ProviderKind::Ollama => OllamaBackend::new(config.model(), config.base_url())
            .map(|b| Arc::new(b) as Arc<dyn LanguageModel>),
    };

    match result {
        Ok(backend) => {
            info!(
                "Initialized {} backend with model {}",
                backend.name(),
                backend.model()
            );
            Some(backend)
        }
        Err(e) => {
            warn!("Failed to initialize {} backend: {}", config.kind, e);
            None
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted backends for exercising the pipeline without a network

    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    pub const UNPARSEABLE: &str = "I'm sorry, I can't produce that outline right now.";

    /// Replays queued responses in order, then repeats an unparseable reply
    pub struct ScriptedModel {
        responses: Mutex<VecDeque<Result<String, ProviderError>>>,
        calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedModel {
        pub fn new(responses: Vec<Result<String, ProviderError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn replies(replies: &[&str]) -> Arc<Self> {
            Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
        }

        pub fn unparseable() -> Arc<Self> {
            Self::new(Vec::new())
        }

        pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LanguageModel for ScriptedModel {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted-model"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn chat(
            &self,
            messages: &[ChatMessage],
            _temperature: f32,
        ) -> Result<String, ProviderError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(UNPARSEABLE.to_string()))
        }
    }

    /// Never answers within any reasonable timeout
    pub struct StalledModel;

    #[async_trait]
    impl LanguageModel for StalledModel {
        fn name(&self) -> &'static str {
            "stalled"
        }

        fn model(&self) -> &str {
            "stalled-model"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn chat(
            &self,
            _messages: &[ChatMessage],
            _temperature: f32,
        ) -> Result<String, ProviderError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("too late".to_string())
        }
    }

    pub fn client(model: Arc<ScriptedModel>) -> LanguageModelClient {
        LanguageModelClient::new(model)
    }
}
