//! Credal Classification Core Library
//!
//! This library provides:
//! - The embedded mammographic dataset and a generic row parser
//! - The frequency model and the naive Bayes / naive credal predictors
//! - Cross-validation and resubstitution diagnostics
//! - Logging and exit codes for the `credal` binary
//!
//! The binary entry point is in `main.rs`.

pub mod classify;
pub mod dataset;
pub mod evaluate;
pub mod exit_codes;
pub mod logging;
