//! Credal classification common types and errors.
//!
//! This crate provides foundational types shared across credal-core modules:
//! - Categorical codes, rows, and column domains
//! - Common error types with stable codes
//! - CLI output formats

pub mod domain;
pub mod error;
pub mod output;

pub use domain::{Code, Domain, Row};
pub use error::{Error, ErrorCategory, Result, StructuredError};
pub use output::OutputFormat;

/// Schema version stamped on every JSON payload.
pub const SCHEMA_VERSION: &str = "1.0.0";
