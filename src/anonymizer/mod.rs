//! Anonymization strategies and span replacement
//!
//! Provides the [`Strategy`] selector, per-entity [`OperatorMap`], and the
//! [`AnonymizerEngine`] that splices replacements into text. Overlapping
//! matches are first merged into disjoint regions, then edits are applied
//! against offsets computed on the **original** text in descending order,
//! so earlier edits never shift the positions of edits not yet applied.

pub mod hash;
pub mod mask;

use crate::domain::{DeidentifyError, EntityType, PiiMatch, Result};
use std::collections::HashMap;
use std::fmt;

/// A span-level anonymization operator
pub trait Operator: Send + Sync {
    /// Operator name for logging
    fn name(&self) -> &'static str;

    /// Produce the replacement for a matched span
    fn operate(&self, span: &str) -> String;
}

/// Entity-type-keyed operator table with a `DEFAULT` fallback
///
/// The mapping is a table rather than a single operator so per-entity tuning
/// (e.g. hashing identifiers but masking names) needs no contract change.
pub struct OperatorMap {
    default: Box<dyn Operator>,
    by_entity: HashMap<EntityType, Box<dyn Operator>>,
}

impl OperatorMap {
    /// Create a map where every entity type uses `default`
    pub fn with_default(default: Box<dyn Operator>) -> Self {
        Self {
            default,
            by_entity: HashMap::new(),
        }
    }

    /// Override the operator for one entity type
    pub fn insert(&mut self, entity: EntityType, operator: Box<dyn Operator>) {
        self.by_entity.insert(entity, operator);
    }

    /// The operator applied to spans of the given entity type
    pub fn operator_for(&self, entity: &EntityType) -> &dyn Operator {
        self.by_entity
            .get(entity)
            .map(|op| op.as_ref())
            .unwrap_or_else(|| self.default.as_ref())
    }
}

/// Supported de-identification strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Replace each span with `*` characters of equal length
    Mask,
    /// Replace each span with its SHA-256 digest
    Hash,
}

impl Strategy {
    /// Strategy names accepted by [`Strategy::parse`]
    pub const SUPPORTED: &'static [&'static str] = &["mask", "hash"];

    /// Parse a strategy name
    ///
    /// # Errors
    ///
    /// [`DeidentifyError::UnsupportedStrategy`] naming the offending value
    /// and listing the accepted options.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "mask" => Ok(Self::Mask),
            "hash" => Ok(Self::Hash),
            other => Err(DeidentifyError::UnsupportedStrategy {
                strategy: other.to_string(),
                supported: Self::SUPPORTED.join(", "),
            }),
        }
    }

    /// The operator table implementing this strategy
    pub fn operators(&self) -> OperatorMap {
        match self {
            Self::Mask => OperatorMap::with_default(Box::new(mask::MaskOperator::default())),
            Self::Hash => OperatorMap::with_default(Box::new(hash::HashOperator)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mask => f.write_str("mask"),
            Self::Hash => f.write_str("hash"),
        }
    }
}

/// Applies operators to matched spans of a text
pub struct AnonymizerEngine;

impl AnonymizerEngine {
    pub fn new() -> Self {
        Self
    }

    /// Replace every matched span of `text` using the operator table
    ///
    /// Overlapping matches are merged into one region covering their union,
    /// attributed to the highest-scoring match, so no detected character
    /// survives in cleartext and a length-changing replacement (hash) can
    /// never corrupt the offsets of a neighboring edit. The disjoint regions
    /// are then applied in order of descending end offset.
    pub fn anonymize(&self, text: &str, matches: &[PiiMatch], operators: &OperatorMap) -> String {
        let chars: Vec<char> = text.chars().collect();
        let regions = merge_overlapping(matches, chars.len());

        let mut output = text.to_string();
        for region in regions.iter().rev() {
            let original_span: String = chars[region.start..region.end].iter().collect();
            let operator = operators.operator_for(&region.entity_type);
            let replacement = operator.operate(&original_span);

            let byte_start = byte_offset(&output, region.start);
            let byte_end = byte_offset(&output, region.end);
            output.replace_range(byte_start..byte_end, &replacement);
        }

        output
    }
}

/// Collapse overlapping matches into disjoint regions, sorted ascending
///
/// Each region carries the entity type of its highest-scoring constituent,
/// which selects the operator for the whole region.
fn merge_overlapping(matches: &[PiiMatch], char_len: usize) -> Vec<PiiMatch> {
    let mut sorted: Vec<&PiiMatch> = matches.iter().collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut regions: Vec<PiiMatch> = Vec::new();
    for m in sorted {
        debug_assert!(m.is_within(char_len));

        match regions.last_mut() {
            Some(region) if m.start < region.end => {
                if m.end > region.end {
                    region.end = m.end;
                }
                if m.score > region.score {
                    region.entity_type = m.entity_type.clone();
                    region.score = m.score;
                }
            }
            _ => regions.push(m.clone()),
        }
    }
    regions
}

impl Default for AnonymizerEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the `char_idx`-th character of `text`
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
