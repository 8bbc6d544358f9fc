//! Core domain types for PII detection and de-identification

pub mod entity;
pub mod errors;

pub use entity::{tags, EntityType, PiiMatch};
pub use errors::DeidentifyError;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, DeidentifyError>;
