//! Patient-record traversal
//!
//! Applies de-identification to the free-text fields of a nested patient
//! record. The record is a JSON object tree mixing structured fields with
//! free text; only string fields whose key appears in the free-text
//! allow-list are rewritten. Nested objects are traversed recursively.
//! List values are deliberately not entered: the record schema keeps free
//! text in scalar string fields, and scanning list elements would change
//! the persistence contract.

use crate::anonymizer::Strategy;
use crate::domain::Result;
use crate::engine::{Deidentifier, DEFAULT_LANGUAGE};
use serde_json::Value;
use std::collections::HashSet;

/// Record fields treated as free text by default
pub const FREE_TEXT_FIELDS: &[&str] = &[
    "symptoms",
    "physical_activity",
    "mental_exercises",
    "mental_health",
    "previous_tests",
    "summary",
    "comments",
];

/// De-identify the default free-text fields of a patient record
///
/// Masks every allow-listed string field in place using the `mask` strategy
/// and returns the same record, so callers can use either the return value
/// or the mutated input.
pub fn deidentify_patient_record<'a>(
    record: &'a mut Value,
    deidentifier: &Deidentifier,
) -> Result<&'a mut Value> {
    let fields: HashSet<&str> = FREE_TEXT_FIELDS.iter().copied().collect();
    deidentify_record_fields(record, deidentifier, &fields)
}

/// De-identify a patient record with a caller-supplied allow-list
pub fn deidentify_record_fields<'a>(
    record: &'a mut Value,
    deidentifier: &Deidentifier,
    free_text_fields: &HashSet<&str>,
) -> Result<&'a mut Value> {
    walk(record, deidentifier, free_text_fields)?;
    Ok(record)
}

fn walk(
    value: &mut Value,
    deidentifier: &Deidentifier,
    free_text_fields: &HashSet<&str>,
) -> Result<()> {
    if let Value::Object(map) = value {
        for (key, entry) in map.iter_mut() {
            match entry {
                Value::Object(_) => walk(entry, deidentifier, free_text_fields)?,
                Value::String(text) if free_text_fields.contains(key.as_str()) => {
                    *text = deidentifier.deidentify_with(text, Strategy::Mask, DEFAULT_LANGUAGE);
                }
                // Lists, numbers, and non-allow-listed strings stay as-is
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_allow_listed_fields_transformed() {
        let engine = Deidentifier::new().unwrap();
        let mut record = json!({
            "symptoms": "John has a fever",
            "age": 42,
            "nested": {
                "comments": "call 555-1234"
            }
        });

        let fields: HashSet<&str> = ["symptoms", "comments"].into_iter().collect();
        deidentify_record_fields(&mut record, &engine, &fields).unwrap();

        assert_eq!(record["age"], 42);
        assert_ne!(record["symptoms"], "John has a fever");
        assert!(record["symptoms"].as_str().unwrap().contains("****"));
        assert_ne!(record["nested"]["comments"], "call 555-1234");
    }

    #[test]
    fn test_non_allow_listed_strings_untouched() {
        let engine = Deidentifier::new().unwrap();
        let mut record = json!({
            "patient_id": "jane.d@example.com",
            "summary": "email jane.d@example.com"
        });

        deidentify_patient_record(&mut record, &engine).unwrap();

        assert_eq!(record["patient_id"], "jane.d@example.com");
        assert!(!record["summary"].as_str().unwrap().contains("jane.d@example.com"));
    }

    #[test]
    fn test_lists_not_traversed() {
        let engine = Deidentifier::new().unwrap();
        let mut record = json!({
            "comments": ["jane.d@example.com"],
            "summary": "contact jane.d@example.com"
        });

        deidentify_patient_record(&mut record, &engine).unwrap();

        // A list value under an allow-listed key is left alone
        assert_eq!(record["comments"][0], "jane.d@example.com");
        assert!(!record["summary"].as_str().unwrap().contains("@"));
    }

    #[test]
    fn test_returns_the_mutated_record() {
        let engine = Deidentifier::new().unwrap();
        let mut record = json!({"summary": "ssn 123-45-6789"});

        let returned = deidentify_patient_record(&mut record, &engine)
            .unwrap()
            .clone();
        assert_eq!(returned, record);
        assert!(!record["summary"].as_str().unwrap().contains("6789"));
    }
}
