mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_dir: default_output_dir(),
            max_chapters: default_max_chapters(),
            provider: ProviderConfig::default(),
            planning: PlanningConfig::default(),
            writing: WritingConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            tracing::info!("Loading config from {:?}", path);
            Self::load(path)?
        } else {
            tracing::info!("No config found at {:?}, using defaults", path);
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        let temperatures = [
            ("planning.temperature", self.planning.temperature),
            ("planning.merge_temperature", self.planning.merge_temperature),
            ("planning.critique_temperature", self.planning.critique_temperature),
            ("writing.temperature", self.writing.temperature),
        ];
        for (name, value) in temperatures {
            if !(0.0..=2.0).contains(&value) {
                return Err(ConfigError::InvalidTemperature { name, value });
            }
        }

        if self.max_chapters == 0 {
            return Err(ConfigError::InvalidChapterLimit);
        }

        if self.planning.max_context_chars == 0 {
            return Err(ConfigError::InvalidContextLimit("planning.max_context_chars"));
        }
        if self.planning.max_candidates_chars == 0 {
            return Err(ConfigError::InvalidContextLimit(
                "planning.max_candidates_chars",
            ));
        }

        let timeouts = [
            ("planning.timeout_sec", self.planning.timeout_sec),
            ("writing.timeout_sec", self.writing.timeout_sec),
        ];
        for (name, value) in timeouts {
            if value == 0 {
                return Err(ConfigError::InvalidTimeout(name));
            }
        }

        Ok(())
    }
}
