//! Masking operator

use super::Operator;

/// Replaces a span with repeated placeholder characters of equal length
///
/// Length is measured in characters, so the masked output always has exactly
/// as many characters as the input span.
pub struct MaskOperator {
    masking_char: char,
}

impl MaskOperator {
    pub fn new(masking_char: char) -> Self {
        Self { masking_char }
    }
}

impl Default for MaskOperator {
    fn default() -> Self {
        Self::new('*')
    }
}

impl Operator for MaskOperator {
    fn name(&self) -> &'static str {
        "mask"
    }

    fn operate(&self, span: &str) -> String {
        let len = span.chars().count();
        std::iter::repeat(self.masking_char).take(len).collect()
    }
}
