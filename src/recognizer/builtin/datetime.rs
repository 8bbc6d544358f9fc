//! Calendar date recognizer

use super::compile;
use crate::domain::{tags, EntityType, PiiMatch, Result};
use crate::recognizer::{char_span, Recognizer};
use regex::Regex;

/// Date recognizer for ISO, slash, and month-name forms
///
/// ISO candidates are range-checked (month 1-12, day 1-31) so that
/// arbitrary hyphenated numbers don't register as dates.
pub struct DateRecognizer {
    entities: [EntityType; 1],
    iso: Regex,
    slash: Regex,
    month_name: Vec<Regex>,
}

impl DateRecognizer {
    pub fn new() -> Result<Self> {
        const MONTHS: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";
        Ok(Self {
            entities: [EntityType::new(tags::DATE_TIME)],
            iso: compile(tags::DATE_TIME, r"\b\d{4}-\d{2}-\d{2}\b")?,
            slash: compile(tags::DATE_TIME, r"\b\d{1,2}/\d{1,2}/\d{2,4}\b")?,
            month_name: vec![
                // March 5, 2024 / Mar 5 2024
                compile(
                    tags::DATE_TIME,
                    &format!(r"\b(?:{MONTHS})[a-z]*\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"),
                )?,
                // 5 March 2024
                compile(
                    tags::DATE_TIME,
                    &format!(r"\b\d{{1,2}}\s+(?:{MONTHS})[a-z]*\.?\s+\d{{4}}\b"),
                )?,
            ],
        })
    }

    fn valid_iso(candidate: &str) -> bool {
        let mut parts = candidate.split('-').skip(1);
        let month = parts.next().and_then(|p| p.parse::<u32>().ok());
        let day = parts.next().and_then(|p| p.parse::<u32>().ok());
        matches!((month, day), (Some(m), Some(d)) if (1..=12).contains(&m) && (1..=31).contains(&d))
    }
}

impl Recognizer for DateRecognizer {
    fn name(&self) -> &str {
        "date_recognizer"
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn language(&self) -> &str {
        "en"
    }

    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>> {
        let mut matches = Vec::new();
        for m in self.iso.find_iter(text) {
            if !Self::valid_iso(m.as_str()) {
                continue;
            }
            let (start, end) = char_span(text, m.start(), m.end());
            matches.push(PiiMatch::new(self.entities[0].clone(), start, end, 0.6));
        }
        for m in self.slash.find_iter(text) {
            let (start, end) = char_span(text, m.start(), m.end());
            matches.push(PiiMatch::new(self.entities[0].clone(), start, end, 0.6));
        }
        for regex in &self.month_name {
            for m in regex.find_iter(text) {
                let (start, end) = char_span(text, m.start(), m.end());
                matches.push(PiiMatch::new(self.entities[0].clone(), start, end, 0.6));
            }
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        let rec = DateRecognizer::new().unwrap();
        let matches = rec.detect("Her date of birth is 1990-01-15.").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].entity_type, "DATE_TIME");
    }

    #[test]
    fn test_iso_range_check() {
        let rec = DateRecognizer::new().unwrap();
        assert!(rec.detect("build 2024-99-99 failed").unwrap().is_empty());
    }

    #[test]
    fn test_slash_date() {
        let rec = DateRecognizer::new().unwrap();
        assert_eq!(rec.detect("admitted 12/31/2023").unwrap().len(), 1);
    }

    #[test]
    fn test_month_name_dates() {
        let rec = DateRecognizer::new().unwrap();
        assert_eq!(rec.detect("seen on March 5, 2024").unwrap().len(), 1);
        assert_eq!(rec.detect("seen on 5 March 2024").unwrap().len(), 1);
    }

    #[test]
    fn test_plain_text_has_no_dates() {
        let rec = DateRecognizer::new().unwrap();
        assert!(rec
            .detect("This is a perfectly safe sentence with no sensitive data.")
            .unwrap()
            .is_empty());
    }
}
