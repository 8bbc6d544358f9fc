//! Analyzer engine
//!
//! Runs every recognizer applicable to a language against input text and
//! returns the union of their matches. Recognizer failures are isolated: a
//! recognizer that errors is logged and skipped, and the remaining
//! recognizers still contribute results.

use crate::domain::{EntityType, PiiMatch};
use crate::recognizer::registry::RecognizerRegistry;

/// Runs registered recognizers over input text
pub struct AnalyzerEngine {
    registry: RecognizerRegistry,
}

impl AnalyzerEngine {
    /// Create an analyzer over an existing registry
    pub fn new(registry: RecognizerRegistry) -> Self {
        Self { registry }
    }

    /// Read access to the registry
    pub fn registry(&self) -> &RecognizerRegistry {
        &self.registry
    }

    /// Mutable access to the registry
    ///
    /// Mutation requires exclusive access, so concurrent `analyze` calls on
    /// a shared analyzer can never observe a half-updated registry.
    pub fn registry_mut(&mut self) -> &mut RecognizerRegistry {
        &mut self.registry
    }

    /// Detect PII spans in `text`
    ///
    /// When `entities` is given, only recognizers able to emit at least one
    /// of those types run, and results are filtered to exactly those types.
    /// Without a filter every applicable recognizer runs and everything it
    /// finds is returned. The result order is unspecified.
    pub fn analyze(
        &self,
        text: &str,
        entities: Option<&[EntityType]>,
        language: &str,
    ) -> Vec<PiiMatch> {
        let char_len = text.chars().count();
        let mut matches = Vec::new();

        for recognizer in self.registry.recognizers_for(language, entities) {
            let found = match recognizer.detect(text) {
                Ok(found) => found,
                Err(e) => {
                    tracing::warn!(
                        recognizer = recognizer.name(),
                        error = %e,
                        "Recognizer failed; skipping its results"
                    );
                    continue;
                }
            };

            for m in found {
                if !m.is_within(char_len) {
                    tracing::warn!(
                        recognizer = recognizer.name(),
                        start = m.start,
                        end = m.end,
                        "Dropping match with out-of-bounds span"
                    );
                    continue;
                }
                if let Some(wanted) = entities {
                    if !wanted.contains(&m.entity_type) {
                        continue;
                    }
                }
                matches.push(m);
            }
        }

        tracing::debug!(
            language,
            matches = matches.len(),
            "Analysis complete"
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{tags, Result};
    use crate::recognizer::{pattern::PatternRecognizer, Recognizer};
    use std::sync::Arc;

    struct FailingRecognizer {
        entities: [EntityType; 1],
    }

    impl FailingRecognizer {
        fn new() -> Self {
            Self {
                entities: [EntityType::new("BROKEN")],
            }
        }
    }

    impl Recognizer for FailingRecognizer {
        fn name(&self) -> &str {
            "failing_recognizer"
        }

        fn supported_entities(&self) -> &[EntityType] {
            &self.entities
        }

        fn language(&self) -> &str {
            "en"
        }

        fn detect(&self, _text: &str) -> Result<Vec<PiiMatch>> {
            Err(crate::domain::DeidentifyError::Recognition {
                recognizer: "failing_recognizer".to_string(),
                reason: "synthetic failure".to_string(),
            })
        }
    }

    fn analyzer_with_order_id() -> AnalyzerEngine {
        let mut registry = RecognizerRegistry::with_builtins("en").unwrap();
        registry.add_pattern_recognizer(
            PatternRecognizer::new("ORDER_ID", r"ORD-\d{4}", 0.85, "en").unwrap(),
        );
        AnalyzerEngine::new(registry)
    }

    #[test]
    fn test_analyze_finds_custom_entity() {
        let analyzer = analyzer_with_order_id();
        let matches = analyzer.analyze("The order confirmation is ORD-1234.", None, "en");
        assert!(matches.iter().any(|m| m.entity_type == "ORDER_ID"));
    }

    #[test]
    fn test_entity_filter_restricts_results() {
        let analyzer = analyzer_with_order_id();
        let text = "Email jane.d@example.com about ORD-1234.";

        let unfiltered = analyzer.analyze(text, None, "en");
        assert!(unfiltered.iter().any(|m| m.entity_type == "EMAIL_ADDRESS"));
        assert!(unfiltered.iter().any(|m| m.entity_type == "ORDER_ID"));

        let wanted = [EntityType::new("ORDER_ID")];
        let filtered = analyzer.analyze(text, Some(&wanted), "en");
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|m| m.entity_type == "ORDER_ID"));
    }

    #[test]
    fn test_no_pii_yields_empty() {
        let analyzer = AnalyzerEngine::new(RecognizerRegistry::with_builtins("en").unwrap());
        let matches = analyzer.analyze(
            "This is a perfectly safe sentence with no sensitive data.",
            None,
            "en",
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_failing_recognizer_is_isolated() {
        let mut registry = RecognizerRegistry::with_builtins("en").unwrap();
        registry.add_recognizer(Arc::new(FailingRecognizer::new()));
        let analyzer = AnalyzerEngine::new(registry);

        let matches = analyzer.analyze("Contact jane.d@example.com.", None, "en");
        assert!(matches.iter().any(|m| m.entity_type == tags::EMAIL_ADDRESS));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let analyzer = analyzer_with_order_id();
        let text = "On 2023-05-10, Mr. Smith (john.p.smith@corp.com) filed ORD-1234.";
        let first = analyzer.analyze(text, None, "en");
        let second = analyzer.analyze(text, None, "en");
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_language_runs_nothing() {
        let analyzer = analyzer_with_order_id();
        let matches = analyzer.analyze("jane.d@example.com", None, "fr");
        assert!(matches.is_empty());
    }
}
