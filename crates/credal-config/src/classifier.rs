//! Typed `classifier.json` configuration.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::validate::{validate_classifier, ValidationError, ValidationResult};

/// Prediction method used by `evaluate` and `predict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Smoothed naive Bayes point prediction.
    #[value(name = "naive_bayes")]
    NaiveBayes,

    /// Naive credal classifier with interval-product bounds.
    #[default]
    #[value(name = "naive_credal")]
    NaiveCredal,

    /// Naive credal classifier with the pairwise dominance test.
    #[value(name = "credal_dominance")]
    CredalDominance,
}

impl Method {
    /// All methods, in comparison-report order.
    pub const ALL: [Method; 3] = [
        Method::NaiveBayes,
        Method::NaiveCredal,
        Method::CredalDominance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::NaiveBayes => "naive_bayes",
            Method::NaiveCredal => "naive_credal",
            Method::CredalDominance => "credal_dominance",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier and evaluation settings.
///
/// Missing fields take their defaults; unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Imprecise Dirichlet perturbation `s`.
    pub perturbation: f64,

    /// Number of cross-validation folds.
    pub folds: usize,

    /// Label column index.
    pub class_column: usize,

    /// Feature column indices, in scoring order.
    pub attribute_columns: Vec<usize>,

    pub method: Method,

    /// Keep only the first `limit` rows of the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            perturbation: 2.0,
            folds: 10,
            class_column: 5,
            attribute_columns: vec![0, 1, 2, 3, 4],
            method: Method::default(),
            limit: None,
        }
    }
}

impl ClassifierConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json_str(text: &str) -> ValidationResult<Self> {
        let config: ClassifierConfig =
            serde_json::from_str(text).map_err(|e| ValidationError::ParseError(e.to_string()))?;
        validate_classifier(&config)?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn from_file(path: &Path) -> ValidationResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mammographic_setup() {
        let config = ClassifierConfig::default();
        assert_eq!(config.perturbation, 2.0);
        assert_eq!(config.folds, 10);
        assert_eq!(config.class_column, 5);
        assert_eq!(config.attribute_columns, vec![0, 1, 2, 3, 4]);
        assert_eq!(config.method, Method::NaiveCredal);
        assert!(config.limit.is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = ClassifierConfig::from_json_str(r#"{"folds": 5}"#).unwrap();
        assert_eq!(config.folds, 5);
        assert_eq!(config.perturbation, 2.0);
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = ClassifierConfig::from_json_str(r#"{"smoothing": 1.0}"#).unwrap_err();
        assert!(matches!(err, ValidationError::ParseError(_)));
    }

    #[test]
    fn method_names_are_snake_case() {
        let config = ClassifierConfig::from_json_str(r#"{"method": "credal_dominance"}"#).unwrap();
        assert_eq!(config.method, Method::CredalDominance);
        for method in Method::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method));
        }
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = ClassifierConfig::from_json_str(r#"{"perturbation": -1.0}"#).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn limit_is_omitted_when_unset() {
        let json = serde_json::to_string(&ClassifierConfig::default()).unwrap();
        assert!(!json.contains("limit"));
    }
}
