//! Scalar decision criteria over a credal set.
//!
//! Each criterion maps a gamble to one number (lower, upper, or Hurwicz
//! expectation) and flags every gamble whose number is within [`TOL`] of
//! the best. Ties are all reported.

use super::expectation::{expectation, hurwicz_expectation, lower_expectation, upper_expectation};
use super::TOL;

/// Flag every value with `value + TOL >= max(values)`.
///
/// NAN values are never flagged; an empty input gives an empty output.
pub fn is_within_tolerance_of_max(values: &[f64]) -> Vec<bool> {
    let max = values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|&v| v + TOL >= max).collect()
}

/// Score every gamble with `score` and flag the (near-)maximal ones.
pub fn is_gamma_maxi_something<F>(score: F, gambles: &[Vec<f64>]) -> Vec<bool>
where
    F: Fn(&[f64]) -> f64,
{
    let values: Vec<f64> = gambles.iter().map(|g| score(g.as_slice())).collect();
    is_within_tolerance_of_max(&values)
}

/// Gamma-maximin: maximise the lower expectation.
pub fn is_gamma_maximin<P: AsRef<[f64]>>(credal_set: &[P], gambles: &[Vec<f64>]) -> Vec<bool> {
    is_gamma_maxi_something(|g| lower_expectation(credal_set, g), gambles)
}

/// Gamma-maximax: maximise the upper expectation.
pub fn is_gamma_maximax<P: AsRef<[f64]>>(credal_set: &[P], gambles: &[Vec<f64>]) -> Vec<bool> {
    is_gamma_maxi_something(|g| upper_expectation(credal_set, g), gambles)
}

/// Hurwicz criterion with pessimism index `beta`.
pub fn is_hurwicz<P: AsRef<[f64]>>(
    beta: f64,
    credal_set: &[P],
    gambles: &[Vec<f64>],
) -> Vec<bool> {
    is_gamma_maxi_something(|g| hurwicz_expectation(beta, credal_set, g), gambles)
}

/// Robust-Bayes admissibility: a gamble is flagged iff it is Bayes-optimal
/// (within [`TOL`]) for at least one PMF of the credal set.
pub fn is_rbayes_admissible<P: AsRef<[f64]>>(
    credal_set: &[P],
    gambles: &[Vec<f64>],
) -> Vec<bool> {
    let mut admissible = vec![false; gambles.len()];
    for pmf in credal_set {
        let values: Vec<f64> = gambles
            .iter()
            .map(|g| expectation(pmf.as_ref(), g))
            .collect();
        for (flag, best) in admissible
            .iter_mut()
            .zip(is_within_tolerance_of_max(&values))
        {
            *flag |= best;
        }
    }
    admissible
}
