//! Credal classifier configuration loading and validation.
//!
//! This crate provides:
//! - The typed `classifier.json` struct and method selector
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation

pub mod classifier;
pub mod resolve;
pub mod validate;

pub use classifier::{ClassifierConfig, Method};
pub use resolve::{load_config, resolve_config, ConfigSource, LoadedConfig, ResolvedPath};
pub use validate::{ValidationError, ValidationResult};
