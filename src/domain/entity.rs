//! Entity types and analyzer match results
//!
//! An [`EntityType`] is a stable string tag identifying what kind of PII a
//! recognizer finds. The set is open: built-in tags live in [`tags`], and
//! callers can introduce new tags at runtime through custom recognizers.
//!
//! A [`PiiMatch`] records one detected span. Offsets are **character-based**
//! and half-open, so for any match against `text` the invariant
//! `0 <= start < end <= text.chars().count()` holds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in entity type tags
pub mod tags {
    pub const CREDIT_CARD: &str = "CREDIT_CARD";
    pub const CRYPTO: &str = "CRYPTO";
    pub const DATE_TIME: &str = "DATE_TIME";
    pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
    pub const IBAN_CODE: &str = "IBAN_CODE";
    pub const IP_ADDRESS: &str = "IP_ADDRESS";
    pub const LOCATION: &str = "LOCATION";
    pub const MEDICAL_RECORD_NUMBER: &str = "MEDICAL_RECORD_NUMBER";
    pub const PERSON: &str = "PERSON";
    pub const PHONE_NUMBER: &str = "PHONE_NUMBER";
    pub const URL: &str = "URL";
    pub const US_DRIVER_LICENSE: &str = "US_DRIVER_LICENSE";
    pub const US_SSN: &str = "US_SSN";
}

/// A stable string tag for a category of PII
///
/// Extensible at runtime: any string is a valid tag, so custom recognizers
/// can introduce entity types the built-in set doesn't know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(String);

impl EntityType {
    /// Create an entity type from a tag string
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityType {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for EntityType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for EntityType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One detected PII span with its entity type, offsets, and confidence
///
/// Offsets are character-based, half-open `[start, end)` against the
/// original text. Matches are plain values: they hold no reference to the
/// text they were produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiMatch {
    /// Category of the detected span
    pub entity_type: EntityType,
    /// Start offset (characters, inclusive)
    pub start: usize,
    /// End offset (characters, exclusive)
    pub end: usize,
    /// Confidence score (0.0 - 1.0)
    pub score: f32,
}

impl PiiMatch {
    /// Create a new match, clamping the score into `[0.0, 1.0]`
    pub fn new(entity_type: impl Into<EntityType>, start: usize, end: usize, score: f32) -> Self {
        Self {
            entity_type: entity_type.into(),
            start,
            end,
            score: score.clamp(0.0, 1.0),
        }
    }

    /// Span length in characters
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check the offset invariant against a text of `char_len` characters
    pub fn is_within(&self, char_len: usize) -> bool {
        self.start < self.end && self.end <= char_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_equality() {
        let et = EntityType::new(tags::EMAIL_ADDRESS);
        assert_eq!(et, "EMAIL_ADDRESS");
        assert_eq!(et.as_str(), tags::EMAIL_ADDRESS);
    }

    #[test]
    fn test_entity_type_serde_transparent() {
        let et = EntityType::new("ORDER_ID");
        let json = serde_json::to_string(&et).unwrap();
        assert_eq!(json, "\"ORDER_ID\"");
        let back: EntityType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, et);
    }

    #[test]
    fn test_match_score_clamped() {
        let m = PiiMatch::new(tags::US_SSN, 0, 11, 1.5);
        assert_eq!(m.score, 1.0);
        let m = PiiMatch::new(tags::US_SSN, 0, 11, -0.3);
        assert_eq!(m.score, 0.0);
    }

    #[test]
    fn test_match_bounds() {
        let m = PiiMatch::new(tags::PERSON, 3, 8, 0.85);
        assert_eq!(m.len(), 5);
        assert!(m.is_within(8));
        assert!(m.is_within(100));
        assert!(!m.is_within(7));

        let empty = PiiMatch::new(tags::PERSON, 5, 5, 0.85);
        assert!(empty.is_empty());
        assert!(!empty.is_within(10));
    }
}
