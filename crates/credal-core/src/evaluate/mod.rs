//! Evaluation harness: per-row diagnostics, resubstitution and k-fold
//! cross-validation.

pub mod diagnostic;
pub mod kfold;

pub use diagnostic::{diagnose, evaluate_rows, Diagnostic, DiagnosticSummary};
pub use kfold::{
    cross_validate, cross_validate_outcomes, resubstitution_outcomes, split, summarize, FoldOutcome,
};
