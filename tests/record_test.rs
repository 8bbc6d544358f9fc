//! Patient record de-identification tests

use deidentify::{deidentify_patient_record, deidentify_record_fields, Deidentifier};
use serde_json::json;
use std::collections::HashSet;

#[test]
fn free_text_fields_are_masked_and_structured_fields_kept() {
    let engine = Deidentifier::new().unwrap();
    let mut record = json!({
        "patient_id": "P-001",
        "age": 42,
        "symptoms": "Severe headaches, contact at 415-555-0132",
        "previous_tests": "MRI on 2024-03-15 reviewed by Dr. Emily Carter",
        "summary": "Stable. Email jane.d@example.com with questions.",
        "medications": ["aspirin", "ibuprofen"],
        "visit": {
            "comments": "SSN on file: 123-45-6789"
        }
    });

    deidentify_patient_record(&mut record, &engine).unwrap();

    // Structured fields survive untouched
    assert_eq!(record["patient_id"], "P-001");
    assert_eq!(record["age"], 42);
    assert_eq!(record["medications"], json!(["aspirin", "ibuprofen"]));

    // Free-text fields lose their PII
    assert!(!record["symptoms"].as_str().unwrap().contains("415-555-0132"));
    assert!(!record["previous_tests"].as_str().unwrap().contains("2024-03-15"));
    assert!(!record["previous_tests"].as_str().unwrap().contains("Emily Carter"));
    assert!(!record["summary"].as_str().unwrap().contains("jane.d@example.com"));

    // Nested objects are traversed
    assert!(!record["visit"]["comments"].as_str().unwrap().contains("123-45-6789"));
}

#[test]
fn masking_preserves_field_length() {
    let engine = Deidentifier::new().unwrap();
    let original = "Severe headaches, contact at 415-555-0132";
    let mut record = json!({ "symptoms": original });

    deidentify_patient_record(&mut record, &engine).unwrap();

    let masked = record["symptoms"].as_str().unwrap();
    assert_eq!(masked.chars().count(), original.chars().count());
    assert!(masked.contains('*'));
}

#[test]
fn custom_allow_list_overrides_the_default() {
    let engine = Deidentifier::new().unwrap();
    let mut record = json!({
        "notes": "email jane.d@example.com",
        "summary": "email jane.d@example.com"
    });

    // Only `notes` is treated as free text here
    let fields: HashSet<&str> = ["notes"].into_iter().collect();
    deidentify_record_fields(&mut record, &engine, &fields).unwrap();

    assert!(!record["notes"].as_str().unwrap().contains("jane.d@example.com"));
    assert_eq!(record["summary"], "email jane.d@example.com");
}

#[test]
fn clean_free_text_is_left_unchanged() {
    let engine = Deidentifier::new().unwrap();
    let mut record = json!({
        "symptoms": "persistent dry cough, worse at night"
    });

    deidentify_patient_record(&mut record, &engine).unwrap();
    assert_eq!(record["symptoms"], "persistent dry cough, worse at night");
}

#[test]
fn non_object_records_pass_through() {
    let engine = Deidentifier::new().unwrap();
    let mut record = json!("just a string, not an object");
    deidentify_patient_record(&mut record, &engine).unwrap();
    assert_eq!(record, "just a string, not an object");
}
