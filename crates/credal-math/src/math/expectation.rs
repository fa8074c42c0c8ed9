//! Expectations of gambles under single PMFs and finite credal sets.
//!
//! A gamble is a vector of payoffs, one per outcome. A credal set is a
//! finite list of PMFs over the same outcomes; its lower and upper
//! expectations are the extreme expectations over the list.

/// Expectation of `gamble` under `pmf`: Σ_i p_i · g_i.
///
/// Returns NAN if the lengths differ.
pub fn expectation(pmf: &[f64], gamble: &[f64]) -> f64 {
    if pmf.len() != gamble.len() {
        return f64::NAN;
    }
    pmf.iter().zip(gamble).map(|(p, g)| p * g).sum()
}

/// Expectations of `gamble` under every PMF of the credal set, in order.
pub fn expectations<P: AsRef<[f64]>>(credal_set: &[P], gamble: &[f64]) -> Vec<f64> {
    credal_set
        .iter()
        .map(|pmf| expectation(pmf.as_ref(), gamble))
        .collect()
}

/// Apply `transform` to the vector of expectations over the credal set.
pub fn transform_expectations<P, F>(transform: F, credal_set: &[P], gamble: &[f64]) -> f64
where
    P: AsRef<[f64]>,
    F: Fn(&[f64]) -> f64,
{
    transform(&expectations(credal_set, gamble))
}

/// Smallest value, NAN for an empty slice or any NAN entry.
pub fn min_value(values: &[f64]) -> f64 {
    if values.is_empty() || values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value, NAN for an empty slice or any NAN entry.
pub fn max_value(values: &[f64]) -> f64 {
    if values.is_empty() || values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Lower expectation (lower prevision) of `gamble` over the credal set.
///
/// Returns NAN for an empty credal set.
pub fn lower_expectation<P: AsRef<[f64]>>(credal_set: &[P], gamble: &[f64]) -> f64 {
    transform_expectations(min_value, credal_set, gamble)
}

/// Upper expectation (upper prevision) of `gamble` over the credal set.
///
/// Returns NAN for an empty credal set.
pub fn upper_expectation<P: AsRef<[f64]>>(credal_set: &[P], gamble: &[f64]) -> f64 {
    transform_expectations(max_value, credal_set, gamble)
}

/// Hurwicz expectation: β · lower + (1 − β) · upper.
///
/// β = 1 is fully pessimistic (gamma-maximin), β = 0 fully optimistic.
pub fn hurwicz_expectation<P: AsRef<[f64]>>(beta: f64, credal_set: &[P], gamble: &[f64]) -> f64 {
    let hurwicz = |values: &[f64]| beta * min_value(values) + (1.0 - beta) * max_value(values);
    transform_expectations(hurwicz, credal_set, gamble)
}

/// Pointwise mixture `(1 − α) · x + α · y`.
///
/// Returns None if the lengths differ.
pub fn combine(alpha: f64, xs: &[f64], ys: &[f64]) -> Option<Vec<f64>> {
    if xs.len() != ys.len() {
        return None;
    }
    Some(
        xs.iter()
            .zip(ys)
            .map(|(x, y)| (1.0 - alpha) * x + alpha * y)
            .collect(),
    )
}
