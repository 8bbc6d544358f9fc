// Deidentify - PII Detection and De-identification Engine
// Copyright (c) 2025 Deidentify Contributors
// Licensed under the MIT License

//! # Deidentify - PII Detection and De-identification
//!
//! Deidentify is a rule-based engine that locates personally identifiable
//! information (PII) in free text and rewrites it with irreversible
//! anonymization strategies. It ships a built-in recognizer set for common
//! entity types (emails, phone numbers, SSNs, credit cards, names, and more)
//! and accepts custom regex recognizers at runtime or from a TOML pattern
//! library.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engine`] - The [`Deidentifier`] facade tying detection to anonymization
//! - [`analyzer`] - Runs recognizers over text and collects [`PiiMatch`]es
//! - [`anonymizer`] - Applies mask/hash operators to matched spans
//! - [`recognizer`] - The [`recognizer::Recognizer`] trait, built-ins, and registry
//! - [`record`] - Free-text field traversal for JSON patient records
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use deidentify::Deidentifier;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Deidentifier::new()?;
//!
//!     // Optional: register a domain-specific recognizer
//!     engine.add_custom_recognizer("ORDER_ID", r"ORD-\d{4}", 0.85, "en")?;
//!
//!     let masked = engine.deidentify(
//!         "Contact jane.d@example.com about ORD-1234.",
//!         "mask",
//!         "en",
//!     )?;
//!     assert!(!masked.contains("jane.d@example.com"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`DeidentifyError`]; detection itself is
//! fail-soft and never aborts on a single recognizer failure:
//!
//! ```rust
//! use deidentify::{Deidentifier, DeidentifyError};
//!
//! fn example() -> Result<(), DeidentifyError> {
//!     let mut engine = Deidentifier::new()?;
//!     // Rejected before any registry mutation
//!     assert!(engine.add_custom_recognizer("X", r"\d+", 1.5, "en").is_err());
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Deidentify uses structured logging with the `tracing` crate; span skips,
//! recognizer failures, and registry changes are all reported with fields
//! rather than formatted strings.

pub mod analyzer;
pub mod anonymizer;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod recognizer;
pub mod record;

pub use domain::{DeidentifyError, EntityType, PiiMatch, Result};
pub use engine::{Deidentifier, DEFAULT_LANGUAGE};
pub use record::{deidentify_patient_record, deidentify_record_fields, FREE_TEXT_FIELDS};
