//! Naive Bayes point estimates.

use credal_common::{Code, Result};
use credal_math::is_within_tolerance_of_max;

use super::model::FrequencyModel;
use super::prediction::Prediction;
use super::{ratio, Predictor};

/// Unsmoothed joint score `n(c)/N · Π n(a_i, c)/n(c)`.
///
/// Fails with `DivisionByZero` when `N = 0` or `n(c) = 0`.
pub fn naive_bayes_prob(model: &FrequencyModel, row: &[Code], class: Code) -> Result<f64> {
    let nc = model.class_count(class) as f64;
    let pc = ratio(nc, model.n() as f64, || {
        "unsmoothed p(c) with no training rows".to_string()
    })?;
    let mut pacs = Vec::with_capacity(model.attribute_columns().len());
    for &column in model.attribute_columns() {
        let value = model.attribute_value(row, column)?;
        let nac = model.joint_count(column, value, class) as f64;
        pacs.push(ratio(nac, nc, || {
            format!("unsmoothed p(a|c) with n(c) = 0 for class {}", class)
        })?);
    }
    Ok(pc * pacs.iter().product::<f64>())
}

/// Joint score with `s` pseudo-counts spread uniformly over classes and,
/// within each class, uniformly over each attribute's values.
///
/// Well defined for `s > 0` even when every count is zero.
pub fn smoothed_naive_bayes_prob(model: &FrequencyModel, row: &[Code], class: Code) -> Result<f64> {
    let s = model.perturbation();
    let t = 1.0 / model.class_domain().len() as f64;
    let nc = model.class_count(class) as f64 + s * t;
    let pc = ratio(nc, model.n() as f64 + s, || {
        "smoothed p(c) with N + s = 0".to_string()
    })?;
    let mut pacs = Vec::with_capacity(model.attribute_columns().len());
    for &column in model.attribute_columns() {
        let value = model.attribute_value(row, column)?;
        let values = model.domain(column).map_or(1, |d| d.len()) as f64;
        let nac = model.joint_count(column, value, class) as f64 + s * t / values;
        pacs.push(ratio(nac, nc, || {
            format!("smoothed p(a|c) with n(c) + s·t = 0 for class {}", class)
        })?);
    }
    Ok(pc * pacs.iter().product::<f64>())
}

/// Smoothed naive Bayes; every class within tolerance of the best score is flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBayes;

impl NaiveBayes {
    /// Smoothed score for every class, in class-domain order.
    pub fn scores(&self, model: &FrequencyModel, row: &[Code]) -> Result<Vec<f64>> {
        model
            .class_domain()
            .iter()
            .map(|class| smoothed_naive_bayes_prob(model, row, class))
            .collect()
    }
}

impl Predictor for NaiveBayes {
    fn name(&self) -> &'static str {
        "naive_bayes"
    }

    fn predict(&self, model: &FrequencyModel, row: &[Code]) -> Result<Prediction> {
        let scores = self.scores(model, row)?;
        Ok(Prediction::from_flags(is_within_tolerance_of_max(&scores)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credal_common::{Domain, Error};

    fn binary_domains() -> Vec<Domain> {
        vec![Domain::range(0, 2), Domain::range(0, 2)]
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12
    }

    #[test]
    fn zero_count_smoothed_scores() {
        let model = FrequencyModel::train(&binary_domains(), &[vec![0, 0]], 0, &[1], 2.0).unwrap();
        let scores = NaiveBayes.scores(&model, &[1, 0]).unwrap();
        assert!(approx_eq(scores[0], 0.5));
        assert!(approx_eq(scores[1], 1.0 / 6.0));
        assert_eq!(
            NaiveBayes.predict(&model, &[1, 0]).unwrap().flags(),
            &[true, false]
        );
    }

    #[test]
    fn empty_training_set_is_uniform() {
        let model = FrequencyModel::train(&binary_domains(), &[], 0, &[1], 2.0).unwrap();
        for row in [[0, 0], [0, 1], [1, 0], [1, 1]] {
            for class in [0, 1] {
                let p = smoothed_naive_bayes_prob(&model, &row, class).unwrap();
                assert!(approx_eq(p, 0.25), "p = {p}");
            }
            assert_eq!(NaiveBayes.predict(&model, &row).unwrap().flags(), &[true, true]);
        }
    }

    #[test]
    fn unsmoothed_fails_on_empty_training_set() {
        let model = FrequencyModel::train(&binary_domains(), &[], 0, &[1], 2.0).unwrap();
        let err = naive_bayes_prob(&model, &[0, 0], 0).unwrap_err();
        assert!(matches!(err, Error::DivisionByZero(_)));
    }

    #[test]
    fn unsmoothed_fails_on_unseen_class() {
        let model = FrequencyModel::train(&binary_domains(), &[vec![0, 0]], 0, &[1], 2.0).unwrap();
        assert!(naive_bayes_prob(&model, &[0, 0], 0).is_ok());
        assert!(matches!(
            naive_bayes_prob(&model, &[0, 0], 1),
            Err(Error::DivisionByZero(_))
        ));
    }

    #[test]
    fn smoothed_with_zero_perturbation_matches_unsmoothed() {
        let rows = vec![vec![0, 0], vec![0, 1], vec![1, 1], vec![1, 0], vec![1, 1]];
        let model = FrequencyModel::train(&binary_domains(), &rows, 0, &[1], 0.0).unwrap();
        for row in [[0, 0], [0, 1]] {
            for class in [0, 1] {
                let a = naive_bayes_prob(&model, &row, class).unwrap();
                let b = smoothed_naive_bayes_prob(&model, &row, class).unwrap();
                assert!(approx_eq(a, b));
            }
        }
    }

    #[test]
    fn smoothed_zero_perturbation_empty_set_fails() {
        let model = FrequencyModel::train(&binary_domains(), &[], 0, &[1], 0.0).unwrap();
        assert!(smoothed_naive_bayes_prob(&model, &[0, 0], 0).is_err());
    }

    #[test]
    fn missing_attribute_column_in_row() {
        let model = FrequencyModel::train(&binary_domains(), &[], 0, &[1], 2.0).unwrap();
        let err = NaiveBayes.predict(&model, &[0]).unwrap_err();
        assert_eq!(err.code(), 12);
    }
}
