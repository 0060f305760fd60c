use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Temperature '{name}' must be within 0.0..=2.0, got {value}")]
    InvalidTemperature { name: &'static str, value: f32 },

    #[error("max_chapters must be at least 1")]
    InvalidChapterLimit,

    #[error("Context limit '{0}' must be greater than zero")]
    InvalidContextLimit(&'static str),

    #[error("Timeout '{0}' must be at least one second")]
    InvalidTimeout(&'static str),
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request failed with status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Whether the backend rejected the call for exceeding its rate limit
    pub fn is_rate_limit(&self) -> bool {
        match self {
            ProviderError::RateLimited(_) => true,
            ProviderError::Status { code: 429, .. } => true,
            other => {
                let message = other.to_string().to_lowercase();
                message.contains("429")
                    || message.contains("rate_limit")
                    || message.contains("rate limit")
            }
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) if status.as_u16() == 429 => {
                ProviderError::RateLimited(error.to_string())
            }
            Some(status) => ProviderError::Status {
                code: status.as_u16(),
                body: error.to_string(),
            },
            None if error.is_timeout() => ProviderError::Http(format!("Request timeout: {}", error)),
            None if error.is_connect() => ProviderError::Http(format!("Connection error: {}", error)),
            None => ProviderError::Http(error.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("Chapter count must be between 1 and {max}, got {requested}")]
    ChapterCount { requested: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
