//! Financial instrument recognizers: credit cards, IBANs, crypto wallets

use super::compile;
use crate::domain::{tags, EntityType, PiiMatch, Result};
use crate::recognizer::{char_span, Recognizer};
use regex::Regex;

/// Credit card recognizer with Luhn checksum validation
pub struct CreditCardRecognizer {
    entities: [EntityType; 1],
    regex: Regex,
}

impl CreditCardRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entities: [EntityType::new(tags::CREDIT_CARD)],
            regex: compile(tags::CREDIT_CARD, r"\b\d(?:[ -]?\d){12,18}\b")?,
        })
    }

    fn luhn_check(candidate: &str) -> bool {
        let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
        if !(13..=19).contains(&digits.len()) {
            return false;
        }
        let mut sum = 0u32;
        let mut double = false;
        for &digit in digits.iter().rev() {
            let mut d = digit;
            if double {
                d *= 2;
                if d > 9 {
                    d -= 9;
                }
            }
            sum += d;
            double = !double;
        }
        sum % 10 == 0
    }
}

impl Recognizer for CreditCardRecognizer {
    fn name(&self) -> &str {
        "credit_card_recognizer"
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn language(&self) -> &str {
        "en"
    }

    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>> {
        let mut matches = Vec::new();
        for m in self.regex.find_iter(text) {
            if !Self::luhn_check(m.as_str()) {
                continue;
            }
            let (start, end) = char_span(text, m.start(), m.end());
            matches.push(PiiMatch::new(self.entities[0].clone(), start, end, 0.95));
        }
        Ok(matches)
    }
}

/// IBAN recognizer with mod-97 checksum validation
pub struct IbanRecognizer {
    entities: [EntityType; 1],
    regex: Regex,
}

impl IbanRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entities: [EntityType::new(tags::IBAN_CODE)],
            regex: compile(tags::IBAN_CODE, r"\b[A-Z]{2}\d{2}(?: ?[A-Z0-9]{1,4}){2,8}\b")?,
        })
    }

    /// ISO 13616 check: move the first four characters to the end, map
    /// letters to 10..35, and the resulting number mod 97 must equal 1.
    fn mod97_check(candidate: &str) -> bool {
        let compact: String = candidate.chars().filter(|c| !c.is_whitespace()).collect();
        if !(15..=34).contains(&compact.len()) {
            return false;
        }
        let rearranged = format!("{}{}", &compact[4..], &compact[..4]);
        let mut remainder: u32 = 0;
        for c in rearranged.chars() {
            let value = match c.to_digit(36) {
                Some(v) => v,
                None => return false,
            };
            if value < 10 {
                remainder = (remainder * 10 + value) % 97;
            } else {
                remainder = (remainder * 100 + value) % 97;
            }
        }
        remainder == 1
    }
}

impl Recognizer for IbanRecognizer {
    fn name(&self) -> &str {
        "iban_recognizer"
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn language(&self) -> &str {
        "en"
    }

    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>> {
        let mut matches = Vec::new();
        for m in self.regex.find_iter(text) {
            if !Self::mod97_check(m.as_str()) {
                continue;
            }
            let (start, end) = char_span(text, m.start(), m.end());
            matches.push(PiiMatch::new(self.entities[0].clone(), start, end, 0.9));
        }
        Ok(matches)
    }
}

/// Bitcoin wallet address recognizer (base58 legacy form)
pub struct CryptoRecognizer {
    entities: [EntityType; 1],
    regex: Regex,
}

impl CryptoRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entities: [EntityType::new(tags::CRYPTO)],
            regex: compile(tags::CRYPTO, r"\b[13][a-km-zA-HJ-NP-Z1-9]{25,34}\b")?,
        })
    }
}

impl Recognizer for CryptoRecognizer {
    fn name(&self) -> &str {
        "crypto_recognizer"
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
                PiiMatch::new(self.entities[0].clone(), start, end, 0.6)
            })
            .collect())
    }
}
