//! Configuration management
//!
//! TOML-backed configuration with environment variable overrides. The
//! `DEID_*` variables take precedence over file values, so deployments can
//! adjust language, pattern library, and logging without editing files.

use crate::domain::{DeidentifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_language() -> String {
    "en".to_string()
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeidentifyConfig {
    /// Language the built-in recognizer set is installed for
    #[serde(default = "default_language")]
    pub language: String,

    /// Optional TOML pattern library with custom recognizers
    pub pattern_library: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DeidentifyConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            pattern_library: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl DeidentifyConfig {
    /// Load configuration from a TOML file and apply env overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DeidentifyError::Configuration(format!(
                "Failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let mut config: Self = toml::from_str(&content)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `DEID_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DEID_LANGUAGE") {
            self.language = val;
        }
        if let Ok(val) = std::env::var("DEID_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }
        self.logging.apply_env_overrides()?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.language.is_empty() {
            return Err(DeidentifyError::Configuration(
                "language must not be empty".to_string(),
            ));
        }
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(DeidentifyError::Configuration(format!(
                    "Pattern library file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(DeidentifyError::Configuration(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON file logging
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files
    #[serde(default)]
    pub file_path: String,

    /// Rotation policy for log files (daily, hourly)
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: false,
            file_path: String::new(),
            file_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Apply `DEID_LOG_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DEID_LOG_LEVEL") {
            self.level = val;
        }
        if let Ok(val) = std::env::var("DEID_LOG_FILE_ENABLED") {
            self.file_enabled = val.parse().map_err(|_| {
                DeidentifyError::Configuration(format!(
                    "Invalid DEID_LOG_FILE_ENABLED value: {val}"
                ))
            })?;
        }
        if let Ok(val) = std::env::var("DEID_LOG_FILE_PATH") {
            self.file_path = val;
        }
        Ok(())
    }
}
