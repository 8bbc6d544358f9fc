//! PII recognizers
//!
//! Provides the trait-based recognition interface, the generic
//! [`PatternRecognizer`](pattern::PatternRecognizer), the built-in rule-based
//! set, the TOML pattern library loader, and the
//! [`RecognizerRegistry`](registry::RecognizerRegistry).

pub mod builtin;
pub mod library;
pub mod pattern;
pub mod registry;

use crate::domain::{EntityType, PiiMatch, Result};

/// Trait for PII recognizer implementations
///
/// A recognizer scans text for spans matching one or more entity types.
/// Implementations must be deterministic: the same text must always yield
/// the same matches.
pub trait Recognizer: Send + Sync {
    /// Unique name within a language scope
    fn name(&self) -> &str;

    /// Entity types this recognizer can emit
    fn supported_entities(&self) -> &[EntityType];

    /// Language tag this recognizer applies to (e.g. `"en"`)
    fn language(&self) -> &str;

    /// Detect PII spans in the given text
    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>>;

    /// Whether this is a generic pattern recognizer
    ///
    /// Generic pattern recognizers are subject to replace-by-entity
    /// semantics on re-registration; built-in rule recognizers are not,
    /// even when they emit the same entity type.
    fn is_pattern_recognizer(&self) -> bool {
        false
    }

    /// Whether this recognizer can emit the given entity type
    fn supports_entity(&self, entity: &EntityType) -> bool {
        self.supported_entities().iter().any(|e| e == entity)
    }
}

/// Convert a byte span produced by the `regex` crate into character offsets
///
/// Regex match boundaries always fall on UTF-8 character boundaries, so the
/// conversion is a plain count of the characters before and inside the span.
pub(crate) fn char_span(text: &str, byte_start: usize, byte_end: usize) -> (usize, usize) {
    let start = text[..byte_start].chars().count();
    let len = text[byte_start..byte_end].chars().count();
    (start, start + len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_span_ascii() {
        let text = "call 555-1234 now";
        assert_eq!(char_span(text, 5, 13), (5, 13));
    }

    #[test]
    fn test_char_span_multibyte() {
        // "é" is two bytes; char offsets must not count bytes
        let text = "née Zoë, call 555-1234";
        let byte_start = text.find("555").unwrap();
        let byte_end = byte_start + "555-1234".len();
        let (start, end) = char_span(text, byte_start, byte_end);
        assert_eq!(&text.chars().collect::<Vec<_>>()[start..end]
            .iter()
            .collect::<String>(), "555-1234");
        assert_eq!(end - start, 8);
    }
}
