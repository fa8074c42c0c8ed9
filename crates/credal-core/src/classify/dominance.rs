//! Naive credal classifier with a direct pairwise dominance test.
//!
//! Interval products let every factor reach its extreme independently,
//! which is looser than the credal set actually allows: the pseudo-mass of
//! a class is shared across its attribute tables. Here `c1` dominates `c2`
//! for a test row when
//!
//! ```text
//! ((n(c2) + s·t) / (n(c1) + s·(1−t)))^(k−1) · Π_i n(a_i, c1) / (n(a_i, c2) + s·t) > 1 + TOL
//! ```
//!
//! for every `t` of [`DOMINANCE_GRID`], with `k` the number of attributes.
//! The grid stands in for the continuous range `t ∈ (0, 1)`, so this is an
//! approximate test. On large samples it agrees with the interval-product
//! predictor; on small samples it can keep or drop different classes.

use credal_common::{Code, Result};
use credal_math::{is_maximal, TOL};
use tracing::trace;

use super::model::FrequencyModel;
use super::prediction::Prediction;
use super::{ratio, Predictor};

/// Pseudo-mass split fractions checked by [`class_dominates`].
pub const DOMINANCE_GRID: [f64; 7] = [0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99];

/// Whether `c1` dominates `c2` for `row` at every grid point.
///
/// Stops at the first grid point where dominance fails. Fails with
/// `DivisionByZero` only when `s = 0` and a needed count is zero.
pub fn class_dominates(model: &FrequencyModel, row: &[Code], c1: Code, c2: Code) -> Result<bool> {
    let s = model.perturbation();
    let exponent = model.attribute_columns().len() as f64 - 1.0;
    let nc1 = model.class_count(c1) as f64;
    let nc2 = model.class_count(c2) as f64;

    let mut values = Vec::with_capacity(model.attribute_columns().len());
    for &column in model.attribute_columns() {
        values.push((column, model.attribute_value(row, column)?));
    }

    for t in DOMINANCE_GRID {
        let base = ratio(nc2 + s * t, nc1 + s * (1.0 - t), || {
            format!("dominance class ratio with n({}) = 0 and s = 0", c1)
        })?;
        let mut factors = Vec::with_capacity(values.len());
        for &(column, value) in &values {
            let nac1 = model.joint_count(column, value, c1) as f64;
            let nac2 = model.joint_count(column, value, c2) as f64;
            factors.push(ratio(nac1, nac2 + s * t, || {
                format!(
                    "dominance attribute ratio with n(a{}={}, {}) = 0 and s = 0",
                    column, value, c2
                )
            })?);
        }
        let score = base.powf(exponent) * factors.iter().product::<f64>();
        if score <= 1.0 + TOL {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `matrix[i][j]` is true when class `i` dominates class `j` (class-domain order).
pub fn dominance_matrix(model: &FrequencyModel, row: &[Code]) -> Result<Vec<Vec<bool>>> {
    let classes = model.class_domain().values();
    classes
        .iter()
        .map(|&c1| {
            classes
                .iter()
                .map(|&c2| class_dominates(model, row, c1, c2))
                .collect()
        })
        .collect()
}

/// Keeps every class no class dominates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredalDominance;

impl Predictor for CredalDominance {
    fn name(&self) -> &'static str {
        "credal_dominance"
    }

    fn predict(&self, model: &FrequencyModel, row: &[Code]) -> Result<Prediction> {
        let matrix = dominance_matrix(model, row)?;
        let indices: Vec<usize> = (0..matrix.len()).collect();
        let flags = is_maximal(&indices, |&i, &j| matrix[i][j]);
        trace!(flags = ?flags, "dominance maximal classes");
        Ok(Prediction::from_flags(flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credal_common::Domain;

    fn binary_domains() -> Vec<Domain> {
        vec![Domain::range(0, 2), Domain::range(0, 2)]
    }

    #[test]
    fn zero_count_is_fully_indeterminate() {
        let model = FrequencyModel::train(&binary_domains(), &[vec![0, 0]], 0, &[1], 2.0).unwrap();
        assert_eq!(
            CredalDominance.predict(&model, &[1, 0]).unwrap().flags(),
            &[true, true]
        );
    }

    #[test]
    fn empty_training_set_is_fully_indeterminate() {
        let model = FrequencyModel::train(&binary_domains(), &[], 0, &[1], 2.0).unwrap();
        for row in [[0, 0], [0, 1], [1, 0], [1, 1]] {
            assert_eq!(
                CredalDominance.predict(&model, &row).unwrap().flags(),
                &[true, true]
            );
        }
    }

    #[test]
    fn no_class_dominates_itself() {
        let rows = vec![vec![0, 0], vec![0, 0], vec![1, 1], vec![0, 1]];
        let model = FrequencyModel::train(&binary_domains(), &rows, 0, &[1], 2.0).unwrap();
        for row in [[0, 0], [0, 1]] {
            let matrix = dominance_matrix(&model, &row).unwrap();
            assert!(!matrix[0][0]);
            assert!(!matrix[1][1]);
        }
    }

    #[test]
    fn strong_evidence_dominates() {
        let mut rows = vec![vec![0, 0]; 50];
        rows.extend(vec![vec![1, 1]; 50]);
        let model = FrequencyModel::train(&binary_domains(), &rows, 0, &[1], 2.0).unwrap();
        assert!(class_dominates(&model, &[0, 0], 0, 1).unwrap());
        assert!(!class_dominates(&model, &[0, 0], 1, 0).unwrap());
        assert_eq!(
            CredalDominance.predict(&model, &[0, 0]).unwrap().flags(),
            &[true, false]
        );
    }

    #[test]
    fn zero_perturbation_with_zero_counts_fails() {
        let model = FrequencyModel::train(&binary_domains(), &[vec![0, 0]], 0, &[1], 0.0).unwrap();
        assert!(CredalDominance.predict(&model, &[1, 0]).is_err());
    }
}
