//! Configuration types for lang-probe.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default cap on input length enforced by callers such as the CLI.
///
/// The detector itself accepts any length; this is the guard applied before
/// invoking it.
pub const DEFAULT_MAX_CODE_LEN: usize = 10_000;

/// Top-level configuration for lang-probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Minimum confidence (0-100) required to report a mismatch.
    /// Defaults to [`DEFAULT_MIN_CONFIDENCE`](crate::DEFAULT_MIN_CONFIDENCE).
    #[serde(default)]
    pub min_confidence: Option<u8>,

    /// Maximum accepted input length in bytes (default: 10,000).
    #[serde(default)]
    pub max_code_len: Option<usize>,

    /// Per-language toggles, keyed by language identifier.
    #[serde(default)]
    pub languages: HashMap<String, LanguageToggle>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks whether a language profile is enabled.
    #[must_use]
    pub fn is_language_enabled(&self, language: &str) -> bool {
        self.languages
            .get(language)
            .map_or(true, |t| t.enabled.unwrap_or(true))
    }

    /// Returns the effective input length cap.
    #[must_use]
    pub fn effective_max_code_len(&self) -> usize {
        self.max_code_len.unwrap_or(DEFAULT_MAX_CODE_LEN)
    }
}

/// Per-language configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageToggle {
    /// Whether this language's profile participates in detection.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.min_confidence.is_none());
        assert!(config.languages.is_empty());
        assert!(config.is_language_enabled("python"));
        assert_eq!(config.effective_max_code_len(), DEFAULT_MAX_CODE_LEN);
    }

    #[test]
    fn parse_config() {
        let toml = r#"
min_confidence = 45
max_code_len = 4096

[languages.java]
enabled = false
"#;

        let config = Config::parse(toml).expect("failed to parse");
        assert_eq!(config.min_confidence, Some(45));
        assert_eq!(config.effective_max_code_len(), 4096);
        assert!(!config.is_language_enabled("java"));
        assert!(config.is_language_enabled("python"));
    }

    #[test]
    fn enabled_defaults_to_true_when_omitted() {
        let toml = r"
[languages.c]
";
        let config = Config::parse(toml).expect("failed to parse");
        assert!(config.is_language_enabled("c"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("min_confidence = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/lang-probe.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
