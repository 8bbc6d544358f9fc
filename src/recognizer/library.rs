//! TOML pattern library
//!
//! Lets deployments ship custom entities as data instead of code. Each entry
//! becomes one generic [`PatternRecognizer`] per pattern; the compiled set is
//! installed as a single batch, which replaces earlier pattern recognizers
//! for the same entities without the entry's patterns evicting each other.
//!
//! ```toml
//! [recognizers.order_id]
//! entity = "ORDER_ID"
//! patterns = ['ORD-\d{4}']
//! score = 0.85
//! language = "en"
//! ```

use super::pattern::PatternRecognizer;
use crate::domain::{DeidentifyError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

fn default_score() -> f32 {
    0.85
}

fn default_language() -> String {
    "en".to_string()
}

/// One pattern recognizer definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Entity type tag the recognizer emits
    pub entity: String,
    /// Regex patterns for this entity
    pub patterns: Vec<String>,
    /// Confidence score (0.0 - 1.0)
    #[serde(default = "default_score")]
    pub score: f32,
    /// Language the recognizer applies to
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
struct LibraryFile {
    recognizers: HashMap<String, PatternDefinition>,
}

/// A parsed pattern library
pub struct PatternLibrary {
    definitions: Vec<PatternDefinition>,
}

impl PatternLibrary {
    /// Load a pattern library from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DeidentifyError::Configuration(format!(
                "Failed to read pattern library {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse a pattern library from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: LibraryFile = toml::from_str(content)?;
        let mut definitions: Vec<PatternDefinition> = file.recognizers.into_values().collect();
        // Deterministic registration order regardless of TOML map ordering
        definitions.sort_by(|a, b| a.entity.cmp(&b.entity));
        Ok(Self { definitions })
    }

    /// Compile every definition into pattern recognizers
    ///
    /// Validation is all-or-nothing: one bad score or pattern fails the whole
    /// library, so a partially-applied library can't mask entities silently.
    pub fn compile(&self) -> Result<Vec<PatternRecognizer>> {
        let mut recognizers = Vec::new();
        for def in &self.definitions {
            for pattern in &def.patterns {
                recognizers.push(PatternRecognizer::new(
                    &def.entity,
                    pattern,
                    def.score,
                    &def.language,
                )?);
            }
        }
        Ok(recognizers)
    }

    /// Number of definitions in the library
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the library holds no definitions
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::Recognizer;

    const SAMPLE: &str = r#"
        [recognizers.order_id]
        entity = "ORDER_ID"
        patterns = ['ORD-\d{4}']
        score = 0.9

        [recognizers.case_number]
        entity = "CASE_NUMBER"
        patterns = ['CASE-\d{6}', 'C/\d{6}']
    "#;

    #[test]
    fn test_parse_and_compile() {
        let library = PatternLibrary::from_toml(SAMPLE).unwrap();
        assert_eq!(library.len(), 2);

        let recognizers = library.compile().unwrap();
        // CASE_NUMBER contributes two patterns
        assert_eq!(recognizers.len(), 3);
    }

    #[test]
    fn test_defaults_applied() {
        let library = PatternLibrary::from_toml(
            r#"
            [recognizers.order_id]
            entity = "ORDER_ID"
            patterns = ['ORD-\d{4}']
            "#,
        )
        .unwrap();
        let recognizers = library.compile().unwrap();
        assert_eq!(recognizers[0].language(), "en");
    }

    #[test]
    fn test_bad_score_fails_compile() {
        let library = PatternLibrary::from_toml(
            r#"
            [recognizers.bad]
            entity = "BAD"
            patterns = ['x+']
            score = 2.0
            "#,
        )
        .unwrap();
        assert!(library.compile().is_err());
    }

    #[test]
    fn test_bad_regex_fails_compile() {
        let library = PatternLibrary::from_toml(
            r#"
            [recognizers.bad]
            entity = "BAD"
            patterns = ['[unclosed']
            "#,
        )
        .unwrap();
        assert!(library.compile().is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(PatternLibrary::from_toml("not = valid = toml").is_err());
    }
}
