//! Recognizer registry
//!
//! Owns the active recognizer set per language and enforces the
//! replace-by-entity rule for generic pattern recognizers: registering a
//! pattern recognizer first evicts every existing *pattern* recognizer that
//! supports the same entity type in the same language, so re-registration is
//! idempotent. Built-in rule recognizers are never evicted, even when they
//! emit the same entity type.

use super::{builtin, pattern::PatternRecognizer, Recognizer};
use crate::domain::{EntityType, Result};
use std::sync::Arc;

/// The live collection of recognizers available to the analyzer
#[derive(Default)]
pub struct RecognizerRegistry {
    recognizers: Vec<Arc<dyn Recognizer>>,
}

impl RecognizerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the built-in set for `language`
    pub fn with_builtins(language: &str) -> Result<Self> {
        Ok(Self {
            recognizers: builtin::defaults(language)?,
        })
    }

    /// Install a recognizer without any replacement semantics
    pub fn add_recognizer(&mut self, recognizer: Arc<dyn Recognizer>) {
        self.recognizers.push(recognizer);
    }

    /// Install a pattern recognizer, replacing same-entity pattern recognizers
    ///
    /// Only generic pattern recognizers for the same (entity, language) pair
    /// are removed before the insert; built-ins stay untouched.
    pub fn add_pattern_recognizer(&mut self, recognizer: PatternRecognizer) {
        let entity = recognizer.entity().clone();
        let language = recognizer.language().to_string();

        let before = self.recognizers.len();
        self.recognizers.retain(|r| {
            !(r.is_pattern_recognizer() && r.language() == language && r.supports_entity(&entity))
        });
        let evicted = before - self.recognizers.len();
        if evicted > 0 {
            tracing::debug!(
                entity = %entity,
                language = %language,
                evicted,
                "Replaced existing pattern recognizer(s)"
            );
        }

        self.recognizers.push(Arc::new(recognizer));
    }

    /// Install a batch of pattern recognizers with one eviction pass
    ///
    /// Every existing pattern recognizer matching any (entity, language)
    /// pair in the batch is removed first, then the whole batch is pushed.
    /// Recognizers within one batch never evict each other, so multi-pattern
    /// definitions for a single entity stay installed together.
    pub fn add_pattern_recognizers(&mut self, recognizers: Vec<PatternRecognizer>) {
        let pairs: Vec<(EntityType, String)> = recognizers
            .iter()
            .map(|r| (r.entity().clone(), r.language().to_string()))
            .collect();

        let before = self.recognizers.len();
        self.recognizers.retain(|r| {
            !(r.is_pattern_recognizer()
                && pairs
                    .iter()
                    .any(|(entity, language)| r.language() == language && r.supports_entity(entity)))
        });
        let evicted = before - self.recognizers.len();
        if evicted > 0 {
            tracing::debug!(
                evicted,
                installed = recognizers.len(),
                "Replaced existing pattern recognizer(s) with batch"
            );
        }

        for recognizer in recognizers {
            self.recognizers.push(Arc::new(recognizer));
        }
    }

    /// Recognizers applicable to `language`, optionally restricted to those
    /// able to emit at least one of `entities`
    pub fn recognizers_for(
        &self,
        language: &str,
        entities: Option<&[EntityType]>,
    ) -> Vec<Arc<dyn Recognizer>> {
        self.recognizers
            .iter()
            .filter(|r| r.language() == language)
            .filter(|r| match entities {
                Some(wanted) => wanted.iter().any(|e| r.supports_entity(e)),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Number of installed recognizers
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }
}
