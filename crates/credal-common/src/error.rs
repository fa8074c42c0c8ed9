//! Error types for credal classification.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Recoverability hints for automation
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! ```text
//! ✗ Value Outside Domain
//!   Reason: value 7 in row 12, column 0 is outside the column domain
//!   Fix: Check the column domains or clean the input rows before training.
//! ```
//!
//! # Agent-Facing Output
//!
//! ```json
//! {
//!   "code": 20,
//!   "category": "data",
//!   "message": "value 7 in row 12, column 0 is outside the column domain",
//!   "recoverable": false,
//!   "context": { "row": 12, "column": 0, "value": 7 }
//! }
//! ```

use crate::domain::Code;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for credal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Configuration and parameter errors.
    Config,
    /// Malformed or out-of-domain input data.
    Data,
    /// Numerical singularities during estimation.
    Inference,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Inference => write!(f, "inference"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for credal classification.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    #[error("column {column} out of range for {columns} columns")]
    InvalidColumn { column: usize, columns: usize },

    // Data errors (20-29)
    #[error("value {value} in row {row}, column {column} is outside the column domain")]
    DomainViolation { row: usize, column: usize, value: Code },

    #[error("row {row} has {found} columns, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("dataset parse error at line {line}: {message}")]
    DatasetParse { line: usize, message: String },

    // Inference errors (30-39)
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Data errors
    /// - 30-39: Inference errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidParameter { .. } => 11,
            Error::InvalidColumn { .. } => 12,
            Error::DomainViolation { .. } => 20,
            Error::RowWidth { .. } => 21,
            Error::DatasetParse { .. } => 22,
            Error::DivisionByZero(_) => 30,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidParameter { .. } | Error::InvalidColumn { .. } => {
                ErrorCategory::Config
            }

            Error::DomainViolation { .. } | Error::RowWidth { .. } | Error::DatasetParse { .. } => {
                ErrorCategory::Data
            }

            Error::DivisionByZero(_) => ErrorCategory::Inference,

            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether this error is potentially recoverable.
    ///
    /// All computations are deterministic, so nothing is fixed by retrying;
    /// recoverable errors are the ones a different configuration resolves.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Config(_) => true,
            Error::InvalidParameter { .. } => true,
            Error::InvalidColumn { .. } => true,

            // Input data must be fixed upstream
            Error::DomainViolation { .. } => false,
            Error::RowWidth { .. } => false,
            Error::DatasetParse { .. } => false,

            // Switch to a smoothed estimator or s > 0
            Error::DivisionByZero(_) => true,

            Error::Io(_) => true,
            Error::Json(_) => false,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => {
                "Run 'credal config validate' to check the classifier configuration."
            }
            Error::InvalidParameter { .. } => {
                "Check the flag or config value against 'credal evaluate --help'."
            }
            Error::InvalidColumn { .. } => {
                "Column indices are zero-based and must be smaller than the number of columns."
            }
            Error::DomainViolation { .. } => {
                "Check the column domains or clean the input rows before training."
            }
            Error::RowWidth { .. } => "Every row must have one code per declared column.",
            Error::DatasetParse { .. } => {
                "Rows must be comma-separated integers; use '?' to mark unknown values."
            }
            Error::DivisionByZero(_) => {
                "Use a perturbation s > 0 or the smoothed estimator when class counts can be zero."
            }
            Error::Io(_) => "Check that the file exists and is readable.",
            Error::Json(_) => "Invalid JSON. Check syntax with 'jq .' or restore from backup.",
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidParameter { .. } => "Invalid Parameter",
            Error::InvalidColumn { .. } => "Invalid Column",
            Error::DomainViolation { .. } => "Value Outside Domain",
            Error::RowWidth { .. } => "Malformed Row",
            Error::DatasetParse { .. } => "Dataset Parse Error",
            Error::DivisionByZero(_) => "Division By Zero",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Parse Error",
        }
    }

    /// Shorthand for an [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether the error is potentially recoverable.
    pub recoverable: bool,

    /// Additional structured context (e.g., row, column).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::DomainViolation { row, column, value } => {
                context.insert("row".to_string(), serde_json::json!(row));
                context.insert("column".to_string(), serde_json::json!(column));
                context.insert("value".to_string(), serde_json::json!(value));
            }
            Error::RowWidth {
                row,
                expected,
                found,
            } => {
                context.insert("row".to_string(), serde_json::json!(row));
                context.insert("expected".to_string(), serde_json::json!(expected));
                context.insert("found".to_string(), serde_json::json!(found));
            }
            Error::InvalidColumn { column, columns } => {
                context.insert("column".to_string(), serde_json::json!(column));
                context.insert("columns".to_string(), serde_json::json!(columns));
            }
            Error::DatasetParse { line, .. } => {
                context.insert("line".to_string(), serde_json::json!(line));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
            context,
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
