//! Game configuration
//!
//! Settings can come from a TOML file; command-line flags override individual values.
//!
//! ```toml
//! minimum_word_length = 5
//! language = "en"
//! ```

use crate::rules::DEFAULT_LANGUAGE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Minimum word length used when none is configured
pub const DEFAULT_MINIMUM_WORD_LENGTH: usize = 4;

/// Settings that affect the game rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Candidates with fewer letters are rejected as too short
    pub minimum_word_length: usize,
    /// Language code handed to the dictionary
    pub language: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            minimum_word_length: DEFAULT_MINIMUM_WORD_LENGTH,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl GameConfig {
    /// Parse a configuration from TOML text
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a configuration file
    ///
    /// # Errors
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if it is not valid configuration TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the minimum word length
    #[must_use]
    pub fn with_minimum_word_length(mut self, minimum_word_length: usize) -> Self {
        self.minimum_word_length = minimum_word_length;
        self
    }

    /// Replace the dictionary language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
