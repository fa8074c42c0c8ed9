//! Core math modules.

pub mod classical;
pub mod criteria;
pub mod dominance;
pub mod expectation;

/// Absolute tolerance for every "at least as good as the best" and
/// "strictly better than" comparison.
pub const TOL: f64 = 1e-6;
