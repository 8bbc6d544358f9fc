//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Registration errors (`InvalidArgument`, `PatternCompile`) are raised
//! before any registry mutation; strategy errors are raised before any
//! analysis runs.

use thiserror::Error;

/// Main error type for the de-identification engine
#[derive(Debug, Error)]
pub enum DeidentifyError {
    /// Malformed input to a registry or analysis call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A supplied regex pattern failed to compile
    #[error("Invalid regex pattern for entity '{entity}': {reason}")]
    PatternCompile { entity: String, reason: String },

    /// An unknown de-identification strategy was requested
    #[error("Unsupported strategy: '{strategy}'. Available options are: {supported}")]
    UnsupportedStrategy { strategy: String, supported: String },

    /// A recognizer failed internally during detection
    #[error("Recognizer '{recognizer}' failed: {reason}")]
    Recognition { recognizer: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DeidentifyError {
    fn from(err: std::io::Error) -> Self {
        DeidentifyError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DeidentifyError {
    fn from(err: serde_json::Error) -> Self {
        DeidentifyError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DeidentifyError {
    fn from(err: toml::de::Error) -> Self {
        DeidentifyError::Configuration(format!("TOML parse error: {err}"))
    }
}
