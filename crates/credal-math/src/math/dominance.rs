//! Maximality under a pairwise strict-dominance relation.
//!
//! [`is_maximal`] is the one primitive behind both the set-valued decision
//! rules here (interval dominance, pointwise dominance over expectation
//! vectors) and the class-dominance predictor in credal-core.

use super::expectation::{expectations, max_value, min_value};
use super::TOL;

/// Flag every candidate that no candidate dominates.
///
/// `dominates(a, b)` must mean "a strictly dominates b". Every candidate is
/// compared against every candidate, itself included, so the relation should
/// be irreflexive. Output order follows `candidates`.
pub fn is_maximal<T, F>(candidates: &[T], dominates: F) -> Vec<bool>
where
    F: Fn(&T, &T) -> bool,
{
    candidates
        .iter()
        .map(|candidate| !candidates.iter().any(|other| dominates(other, candidate)))
        .collect()
}

/// Interval dominance: `min(xs) > max(ys) + TOL`.
///
/// Empty or NAN-containing vectors never dominate nor are dominated.
pub fn interval_dominates(xs: &[f64], ys: &[f64]) -> bool {
    let low = min_value(xs);
    let high = max_value(ys);
    !low.is_nan() && !high.is_nan() && low > high + TOL
}

/// Pointwise dominance: every `x > y + TOL`.
///
/// Vectors of different (or zero) length never dominate.
pub fn pointwise_dominates(xs: &[f64], ys: &[f64]) -> bool {
    !xs.is_empty() && xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| *x > y + TOL)
}

fn expectation_vectors<P: AsRef<[f64]>>(credal_set: &[P], gambles: &[Vec<f64>]) -> Vec<Vec<f64>> {
    gambles
        .iter()
        .map(|g| expectations(credal_set, g))
        .collect()
}

/// Interval maximality over the expectation vectors of each gamble.
pub fn is_interval_maximal<P: AsRef<[f64]>>(credal_set: &[P], gambles: &[Vec<f64>]) -> Vec<bool> {
    let vectors = expectation_vectors(credal_set, gambles);
    is_maximal(&vectors, |a, b| interval_dominates(a, b))
}

/// Robust-Bayes maximality: pointwise dominance over expectation vectors.
pub fn is_rbayes_maximal<P: AsRef<[f64]>>(credal_set: &[P], gambles: &[Vec<f64>]) -> Vec<bool> {
    let vectors = expectation_vectors(credal_set, gambles);
    is_maximal(&vectors, |a, b| pointwise_dominates(a, b))
}
