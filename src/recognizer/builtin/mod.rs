//! Built-in rule-based recognizers
//!
//! These cover the stock entity roster for English text: contact details,
//! financial instruments, government and medical identifiers, dates, and a
//! heuristic person/location recognizer. Unlike the generic
//! [`PatternRecognizer`](crate::recognizer::pattern::PatternRecognizer),
//! built-ins combine their patterns with structural validation (checksums,
//! range checks) and are never displaced by custom pattern registration.

mod contact;
mod datetime;
mod financial;
mod identifiers;
mod ner;

pub use contact::{EmailRecognizer, IpAddressRecognizer, PhoneRecognizer, UrlRecognizer};
pub use datetime::DateRecognizer;
pub use financial::{CreditCardRecognizer, CryptoRecognizer, IbanRecognizer};
pub use identifiers::{MedicalRecordRecognizer, UsDriverLicenseRecognizer, UsSsnRecognizer};
pub use ner::HeuristicNerRecognizer;

use crate::domain::{DeidentifyError, Result};
use crate::recognizer::Recognizer;
use regex::Regex;
use std::sync::Arc;

/// The default recognizer set for a language
///
/// Currently only `"en"` ships built-ins; other languages start empty and
/// rely on custom pattern recognizers.
pub fn defaults(language: &str) -> Result<Vec<Arc<dyn Recognizer>>> {
    if language != "en" {
        return Ok(Vec::new());
    }

    Ok(vec![
        Arc::new(EmailRecognizer::new()?),
        Arc::new(PhoneRecognizer::new()?),
        Arc::new(UrlRecognizer::new()?),
        Arc::new(IpAddressRecognizer::new()?),
        Arc::new(CreditCardRecognizer::new()?),
        Arc::new(IbanRecognizer::new()?),
        Arc::new(CryptoRecognizer::new()?),
        Arc::new(UsSsnRecognizer::new()?),
        Arc::new(UsDriverLicenseRecognizer::new()?),
        Arc::new(MedicalRecordRecognizer::new()?),
        Arc::new(DateRecognizer::new()?),
        Arc::new(HeuristicNerRecognizer::new()?),
    ])
}

/// Compile a built-in pattern, attributing failures to the owning entity
pub(crate) fn compile(entity: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| DeidentifyError::PatternCompile {
        entity: entity.to_string(),
        reason: e.to_string(),
    })
}
