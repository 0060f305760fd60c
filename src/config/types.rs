use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Root directory for generated books
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Upper bound on the chapter count a caller may request
    #[serde(default = "default_max_chapters")]
    pub max_chapters: usize,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub planning: PlanningConfig,

    #[serde(default)]
    pub writing: WritingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Groq cloud, OpenAI-compatible chat completions
    #[default]
    Groq,
    /// Locally hosted Ollama server
    Ollama,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Groq => write!(f, "groq"),
            ProviderKind::Ollama => write!(f, "ollama"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,

    /// Model name; defaults depend on the provider kind
    #[serde(default)]
    pub model: Option<String>,

    /// Endpoint override; defaults depend on the provider kind
    #[serde(default)]
    pub base_url: Option<String>,

    /// Environment variable holding the API key (Groq only)
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            model: None,
            base_url: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl ProviderConfig {
    pub fn model(&self) -> String {
        self.model.clone().unwrap_or_else(|| match self.kind {
            ProviderKind::Groq => default_groq_model(),
            ProviderKind::Ollama => default_ollama_model(),
        })
    }

    pub fn base_url(&self) -> String {
        let url = self.base_url.clone().unwrap_or_else(|| match self.kind {
            ProviderKind::Groq => default_groq_base_url(),
            ProviderKind::Ollama => default_ollama_base_url(),
        });
        url.trim_end_matches('/').to_string()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PlanningConfig {
    /// Temperature for the perspective outline calls
    #[serde(default = "default_planning_temperature")]
    pub temperature: f32,

    #[serde(default = "default_merge_temperature")]
    pub merge_temperature: f32,

    #[serde(default = "default_critique_temperature")]
    pub critique_temperature: f32,

    /// Per-call timeout in seconds
    #[serde(default = "default_planning_timeout_sec")]
    pub timeout_sec: u64,

    /// Reference context is cut to this many characters before use
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,

    /// Serialized candidate outlines are cut to this many characters in the merge prompt
    #[serde(default = "default_max_candidates_chars")]
    pub max_candidates_chars: usize,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            temperature: default_planning_temperature(),
            merge_temperature: default_merge_temperature(),
            critique_temperature: default_critique_temperature(),
            timeout_sec: default_planning_timeout_sec(),
            max_context_chars: default_max_context_chars(),
            max_candidates_chars: default_max_candidates_chars(),
        }
    }
}

impl PlanningConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct WritingConfig {
    #[serde(default = "default_writing_temperature")]
    pub temperature: f32,

    #[serde(default = "default_writing_timeout_sec")]
    pub timeout_sec: u64,
}

impl Default for WritingConfig {
    fn default() -> Self {
        Self {
            temperature: default_writing_temperature(),
            timeout_sec: default_writing_timeout_sec(),
        }
    }
}

impl WritingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}
