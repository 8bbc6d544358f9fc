//! De-identification engine
//!
//! [`Deidentifier`] wires the recognizer registry, analyzer, and anonymizer
//! together behind the call surface consumers use: register custom
//! recognizers, analyze text, and de-identify it with a named strategy.
//!
//! # Thread safety
//!
//! A constructed `Deidentifier` is `Send + Sync`; `analyze` and `deidentify`
//! take `&self` and can run concurrently. `add_custom_recognizer` takes
//! `&mut self`, so registry mutation is exclusive by construction — share a
//! fully-configured instance, or build one per request.

use crate::analyzer::AnalyzerEngine;
use crate::anonymizer::{AnonymizerEngine, Strategy};
use crate::config::DeidentifyConfig;
use crate::domain::{EntityType, PiiMatch, Result};
use crate::recognizer::{library::PatternLibrary, pattern::PatternRecognizer, registry::RecognizerRegistry};

/// Default language for analysis and de-identification
pub const DEFAULT_LANGUAGE: &str = "en";

/// PII detection and de-identification engine
pub struct Deidentifier {
    analyzer: AnalyzerEngine,
    anonymizer: AnonymizerEngine,
}

impl Deidentifier {
    /// Create an engine with the built-in recognizer set for English
    pub fn new() -> Result<Self> {
        Self::for_language(DEFAULT_LANGUAGE)
    }

    /// Create an engine with the built-in recognizer set for `language`
    pub fn for_language(language: &str) -> Result<Self> {
        Ok(Self {
            analyzer: AnalyzerEngine::new(RecognizerRegistry::with_builtins(language)?),
            anonymizer: AnonymizerEngine::new(),
        })
    }

    /// Create an engine from configuration
    ///
    /// Validates the configuration, installs built-ins for the configured
    /// language, then applies the pattern library if one is configured.
    pub fn from_config(config: &DeidentifyConfig) -> Result<Self> {
        config.validate()?;

        let mut engine = Self::for_language(&config.language)?;
        if let Some(ref path) = config.pattern_library {
            let library = PatternLibrary::from_file(path)?;
            tracing::info!(
                path = %path.display(),
                definitions = library.len(),
                "Loaded pattern library"
            );
            // One batch, so multi-pattern entries don't evict their siblings
            engine
                .analyzer
                .registry_mut()
                .add_pattern_recognizers(library.compile()?);
        }
        Ok(engine)
    }

    /// Register a custom pattern recognizer for `entity_name`
    ///
    /// Any existing generic pattern recognizer supporting `entity_name` in
    /// the same language is replaced, so repeated registration never
    /// produces duplicate matches. Built-in recognizers are unaffected.
    ///
    /// # Errors
    ///
    /// - [`DeidentifyError::InvalidArgument`](crate::domain::DeidentifyError::InvalidArgument)
    ///   if `score` is outside `[0.0, 1.0]`
    /// - [`DeidentifyError::PatternCompile`](crate::domain::DeidentifyError::PatternCompile)
    ///   if `regex_pattern` does not compile
    ///
    /// Both are raised before any registry mutation.
    pub fn add_custom_recognizer(
        &mut self,
        entity_name: &str,
        regex_pattern: &str,
        score: f32,
        language: &str,
    ) -> Result<()> {
        let recognizer = PatternRecognizer::new(entity_name, regex_pattern, score, language)?;
        self.analyzer
            .registry_mut()
            .add_pattern_recognizer(recognizer);
        tracing::info!(entity = entity_name, language, "Custom recognizer added");
        Ok(())
    }

    /// Detect PII spans in `text`
    ///
    /// See [`AnalyzerEngine::analyze`] for filter semantics.
    pub fn analyze(
        &self,
        text: &str,
        entities: Option<&[EntityType]>,
        language: &str,
    ) -> Vec<PiiMatch> {
        self.analyzer.analyze(text, entities, language)
    }

    /// De-identify `text` using the named strategy (`"mask"` or `"hash"`)
    ///
    /// The full registry is consulted (no entity filter). Text without any
    /// detected PII is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`DeidentifyError::UnsupportedStrategy`](crate::domain::DeidentifyError::UnsupportedStrategy)
    /// for unknown strategy names; the error message names the offending
    /// value and lists the accepted options.
    pub fn deidentify(&self, text: &str, strategy: &str, language: &str) -> Result<String> {
        let strategy = Strategy::parse(strategy)?;
        Ok(self.deidentify_with(text, strategy, language))
    }

    /// De-identify `text` with an already-validated strategy
    pub fn deidentify_with(&self, text: &str, strategy: Strategy, language: &str) -> String {
        let matches = self.analyze(text, None, language);
        if matches.is_empty() {
            return text.to_string();
        }

        tracing::debug!(
            %strategy,
            matches = matches.len(),
            "De-identifying text"
        );
        self.anonymizer
            .anonymize(text, &matches, &strategy.operators())
    }

    /// Read access to the underlying analyzer
    pub fn analyzer(&self) -> &AnalyzerEngine {
        &self.analyzer
    }
}
