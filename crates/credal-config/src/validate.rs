//! Configuration validation errors and semantic validation.

use thiserror::Error;

use crate::classifier::ClassifierConfig;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Column {column} in {field} out of range for {columns} columns")]
    ColumnOutOfRange {
        field: String,
        column: usize,
        columns: usize,
    },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::ColumnOutOfRange { .. } => 67,
        }
    }
}

impl From<ValidationError> for credal_common::Error {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::ColumnOutOfRange {
                column, columns, ..
            } => credal_common::Error::InvalidColumn { column, columns },
            other => credal_common::Error::Config(other.to_string()),
        }
    }
}

fn invalid(field: &str, message: String) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        message,
    }
}

/// Validate a classifier config independently of any dataset.
pub fn validate_classifier(config: &ClassifierConfig) -> ValidationResult<()> {
    if !config.perturbation.is_finite() || config.perturbation < 0.0 {
        return Err(invalid(
            "perturbation",
            format!("Must be finite and non-negative, got {}", config.perturbation),
        ));
    }

    if config.folds == 0 {
        return Err(invalid("folds", "Must be at least 1".to_string()));
    }

    if config.limit == Some(0) {
        return Err(invalid("limit", "Must be at least 1 when set".to_string()));
    }

    if config.attribute_columns.is_empty() {
        return Err(invalid(
            "attribute_columns",
            "At least one attribute column is required".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for &column in &config.attribute_columns {
        if column == config.class_column {
            return Err(invalid(
                "attribute_columns",
                format!("Contains the class column {}", column),
            ));
        }
        if !seen.insert(column) {
            return Err(invalid(
                "attribute_columns",
                format!("Column {} listed more than once", column),
            ));
        }
    }

    Ok(())
}

/// Check that every column index fits a dataset with `columns` columns.
pub fn validate_columns(config: &ClassifierConfig, columns: usize) -> ValidationResult<()> {
    if config.class_column >= columns {
        return Err(ValidationError::ColumnOutOfRange {
            field: "class_column".to_string(),
            column: config.class_column,
            columns,
        });
    }
    if let Some(&column) = config.attribute_columns.iter().find(|&&c| c >= columns) {
        return Err(ValidationError::ColumnOutOfRange {
            field: "attribute_columns".to_string(),
            column,
            columns,
        });
    }
    Ok(())
}
