//! Naive credal classifier with interval-product bounds.
//!
//! Under the imprecise Dirichlet model with total pseudo-mass `s`, a count
//! `a` out of `b` yields the probability interval `[a/(b+s), (a+s)/(b+s)]`.
//! Joint bounds multiply the class interval with each attribute's
//! conditional interval. This is a relaxation: each factor reaches its
//! extreme independently.

use credal_common::{Code, Result};
use credal_math::TOL;

use super::model::FrequencyModel;
use super::prediction::Prediction;
use super::{ratio, Predictor};

/// Imprecise Dirichlet interval for `a` successes in `b` trials.
///
/// Fails with `DivisionByZero` when `b + s = 0`.
pub fn interval(a: f64, b: f64, s: f64) -> Result<(f64, f64)> {
    let lower = ratio(a, b + s, || format!("interval for {}/{} with s = 0", a, b))?;
    let upper = ratio(a + s, b + s, || format!("interval for {}/{} with s = 0", a, b))?;
    Ok((lower, upper))
}

/// Lower and upper joint probability bounds for `class`.
pub fn naive_credal_prob(model: &FrequencyModel, row: &[Code], class: Code) -> Result<(f64, f64)> {
    let s = model.perturbation();
    let nc = model.class_count(class) as f64;
    let pc = interval(nc, model.n() as f64, s)?;
    let mut pacs = Vec::with_capacity(model.attribute_columns().len());
    for &column in model.attribute_columns() {
        let value = model.attribute_value(row, column)?;
        let nac = model.joint_count(column, value, class) as f64;
        pacs.push(interval(nac, nc, s)?);
    }
    let lower = pc.0 * pacs.iter().map(|p| p.0).product::<f64>();
    let upper = pc.1 * pacs.iter().map(|p| p.1).product::<f64>();
    Ok((lower, upper))
}

/// Flags every class whose upper bound reaches the best lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveCredal;

impl NaiveCredal {
    /// `(lower, upper)` for every class, in class-domain order.
    pub fn bounds(&self, model: &FrequencyModel, row: &[Code]) -> Result<Vec<(f64, f64)>> {
        model
            .class_domain()
            .iter()
            .map(|class| naive_credal_prob(model, row, class))
            .collect()
    }
}

impl Predictor for NaiveCredal {
    fn name(&self) -> &'static str {
        "naive_credal"
    }

    fn predict(&self, model: &FrequencyModel, row: &[Code]) -> Result<Prediction> {
        let bounds = self.bounds(model, row)?;
        let max_lower = bounds
            .iter()
            .map(|(lower, _)| *lower)
            .fold(f64::NEG_INFINITY, f64::max);
        Ok(Prediction::from_flags(
            bounds
                .iter()
                .map(|(_, upper)| upper + TOL >= max_lower)
                .collect(),
        ))
    }
}
