//! Hashing operator

use super::Operator;
use sha2::{Digest, Sha256};

/// Replaces a span with its SHA-256 hex digest
///
/// The digest is a pure function of the span text, so identical spans always
/// produce identical replacements and the transformation is one-way.
pub struct HashOperator;

impl Operator for HashOperator {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn operate(&self, span: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(span.as_bytes());
        let digest = hasher.finalize();
        format!("{digest:x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_64_hex_chars() {
        let op = HashOperator;
        let digest = op.operate("jane.d@example.com");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_deterministic() {
        let op = HashOperator;
        assert_eq!(op.operate("123-45-6789"), op.operate("123-45-6789"));
    }

    #[test]
    fn test_digest_differs_from_input() {
        let op = HashOperator;
        assert_ne!(op.operate("555-0132"), "555-0132");
    }

    #[test]
    fn test_known_digest() {
        let op = HashOperator;
        // SHA-256 of the empty string
        assert_eq!(
            op.operate(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
