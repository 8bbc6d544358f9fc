//! Generic regex pattern recognizer
//!
//! The building block for custom entities: one regex, one entity type, one
//! confidence score. Validation happens at construction so a bad score or an
//! uncompilable pattern can never silently produce zero matches later.

use super::{char_span, Recognizer};
use crate::domain::{DeidentifyError, EntityType, PiiMatch, Result};
use regex::Regex;

/// A pattern-based recognizer for a single entity type
#[derive(Debug)]
pub struct PatternRecognizer {
    name: String,
    entities: [EntityType; 1],
    regex: Regex,
    score: f32,
    language: String,
}

impl PatternRecognizer {
    /// Create a pattern recognizer for `entity_name`
    ///
    /// # Errors
    ///
    /// - [`DeidentifyError::InvalidArgument`] if `score` is outside `[0.0, 1.0]`
    /// - [`DeidentifyError::PatternCompile`] if `regex_pattern` does not compile
    pub fn new(
        entity_name: &str,
        regex_pattern: &str,
        score: f32,
        language: &str,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&score) {
            return Err(DeidentifyError::InvalidArgument(format!(
                "score must be between 0.0 and 1.0, got {score}"
            )));
        }

        let regex = Regex::new(regex_pattern).map_err(|e| DeidentifyError::PatternCompile {
            entity: entity_name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: entity_name.to_string(),
            entities: [EntityType::new(entity_name)],
            regex,
            score,
            language: language.to_string(),
        })
    }

    /// The entity type this recognizer emits
    pub fn entity(&self) -> &EntityType {
        &self.entities[0]
    }
}

impl Recognizer for PatternRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>> {
        let mut matches = Vec::new();
        for m in self.regex.find_iter(text) {
            if m.start() == m.end() {
                continue;
            }
            let (start, end) = char_span(text, m.start(), m.end());
            matches.push(PiiMatch::new(
                self.entities[0].clone(),
                start,
                end,
                self.score,
            ));
        }
        Ok(matches)
    }

    fn is_pattern_recognizer(&self) -> bool {
        true
    }
}
