//! Game settings loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is a valid config.
//!
//! ```toml
//! max_height = 20
//! all_keyword = "all"
//! delimiter = ","
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session-level settings. None of these change how a ladder is built or walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tallest ladder a player may ask for.
    pub max_height: usize,
    /// Query that prints every participant's outcome and ends the session.
    pub all_keyword: String,
    /// Separator for name and outcome lists.
    pub delimiter: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_height: 100,
            all_keyword: "all".to_string(),
            delimiter: ',',
        }
    }
}

impl GameConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_height == 0 {
            return Err(ConfigError::Invalid("max_height must be positive".into()));
        }
        let keyword = self.all_keyword.trim();
        if keyword.is_empty() || keyword != self.all_keyword {
            return Err(ConfigError::Invalid(
                "all_keyword must not be blank or padded with whitespace".into(),
            ));
        }
        if self.all_keyword.contains(self.delimiter) {
            return Err(ConfigError::Invalid(format!(
                "all_keyword '{}' must not contain the delimiter '{}'",
                self.all_keyword, self.delimiter
            )));
        }
        if self.delimiter.is_whitespace() {
            return Err(ConfigError::Invalid(
                "delimiter must not be whitespace (names are trimmed)".into(),
            ));
        }
        Ok(())
    }
}
