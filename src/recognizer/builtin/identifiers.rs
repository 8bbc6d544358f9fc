//! Government and medical identifier recognizers

use super::compile;
use crate::domain::{tags, EntityType, PiiMatch, Result};
use crate::recognizer::{char_span, Recognizer};
use regex::Regex;

/// US Social Security Number recognizer
///
/// Structurally impossible numbers (000/666/9xx area, 00 group, 0000 serial)
/// are still reported, but at a reduced score: they look like SSNs to a
/// human reader and masking them costs nothing.
pub struct UsSsnRecognizer {
    entities: [EntityType; 1],
    regex: Regex,
}

impl UsSsnRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entities: [EntityType::new(tags::US_SSN)],
            regex: compile(tags::US_SSN, r"\b\d{3}[- ]\d{2}[- ]\d{4}\b")?,
        })
    }

    fn issued_range(candidate: &str) -> bool {
        let digits: String = candidate.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 9 {
            return false;
        }
        let area = &digits[0..3];
        let group = &digits[3..5];
        let serial = &digits[5..9];
        area != "000" && area != "666" && area < "900" && group != "00" && serial != "0000"
    }
}

impl Recognizer for UsSsnRecognizer {
    fn name(&self) -> &str {
        "us_ssn_recognizer"
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn language(&self) -> &str {
        "en"
    }

    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>> {
        Ok(self
            .regex
            .find_iter(text)
            .map(|m| {
                let score = if Self::issued_range(m.as_str()) { 0.85 } else { 0.3 };
                let (start, end) = char_span(text, m.start(), m.end());
                PiiMatch::new(self.entities[0].clone(), start, end, score)
            })
            .collect())
    }
}

/// US driver's license recognizer
pub struct UsDriverLicenseRecognizer {
    entities: [EntityType; 1],
    patterns: Vec<Regex>,
}

impl UsDriverLicenseRecognizer {
    pub fn new() -> Result<Self> {
        let patterns = vec![
            // Segmented form: H123-4567-8901
            compile(tags::US_DRIVER_LICENSE, r"\b[A-Z]\d{3}-\d{4}-\d{4}\b")?,
            // Compact state forms: letter followed by 7-12 digits
            compile(tags::US_DRIVER_LICENSE, r"\b[A-Z]\d{7,12}\b")?,
        ];
        Ok(Self {
            entities: [EntityType::new(tags::US_DRIVER_LICENSE)],
            patterns,
        })
    }
}

impl Recognizer for UsDriverLicenseRecognizer {
    fn name(&self) -> &str {
        "us_driver_license_recognizer"
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn language(&self) -> &str {
        "en"
    }

    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>> {
        let mut matches = Vec::new();
        for regex in &self.patterns {
            for m in regex.find_iter(text) {
                let (start, end) = char_span(text, m.start(), m.end());
                matches.push(PiiMatch::new(self.entities[0].clone(), start, end, 0.65));
            }
        }
        Ok(matches)
    }
}

/// Medical record number recognizer
pub struct MedicalRecordRecognizer {
    entities: [EntityType; 1],
    regex: Regex,
}

impl MedicalRecordRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entities: [EntityType::new(tags::MEDICAL_RECORD_NUMBER)],
            regex: compile(
                tags::MEDICAL_RECORD_NUMBER,
                r"\b(?:MRN|MED)[-:#\s]\s*\d{6,10}\b",
            )?,
        })
    }
}

impl Recognizer for MedicalRecordRecognizer {
    fn name(&self) -> &str {
        "medical_record_recognizer"
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn language(&self) -> &str {
        "en"
    }

    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>> {
        Ok(self
            .regex
            .find_iter(text)
            .map(|m| {
                let (start, end) = char_span(text, m.start(), m.end());
                PiiMatch::new(self.entities[0].clone(), start, end, 0.8)
            })
            .collect())
    }
}
