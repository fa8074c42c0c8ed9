//! Naive classifiers over a [`FrequencyModel`].
//!
//! All three predictors assume attributes are independent given the class:
//! - [`NaiveBayes`]: smoothed point probabilities, near-ties all flagged
//! - [`NaiveCredal`]: imprecise Dirichlet interval products
//! - [`CredalDominance`]: pairwise dominance test over a grid of pseudo-mass splits

pub mod dominance;
pub mod model;
pub mod naive_bayes;
pub mod naive_credal;
pub mod prediction;

pub use dominance::{class_dominates, dominance_matrix, CredalDominance, DOMINANCE_GRID};
pub use model::{check_rows, FrequencyModel, TrainingSetup};
pub use naive_bayes::{naive_bayes_prob, smoothed_naive_bayes_prob, NaiveBayes};
pub use naive_credal::{interval, naive_credal_prob, NaiveCredal};
pub use prediction::Prediction;

use credal_common::{Code, Error, Result};
use credal_config::Method;

/// Maps a trained model and a test row to a set-valued prediction.
pub trait Predictor {
    /// Method name for logs and reports.
    fn name(&self) -> &'static str;

    /// Flags for every class in class-domain order.
    fn predict(&self, model: &FrequencyModel, row: &[Code]) -> Result<Prediction>;
}

impl Predictor for Method {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn predict(&self, model: &FrequencyModel, row: &[Code]) -> Result<Prediction> {
        match self {
            Method::NaiveBayes => NaiveBayes.predict(model, row),
            Method::NaiveCredal => NaiveCredal.predict(model, row),
            Method::CredalDominance => CredalDominance.predict(model, row),
        }
    }
}

/// `numerator / denominator`, failing on a zero denominator.
pub(crate) fn ratio<F>(numerator: f64, denominator: f64, context: F) -> Result<f64>
where
    F: FnOnce() -> String,
{
    if denominator == 0.0 {
        return Err(Error::DivisionByZero(context()));
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use credal_common::Domain;

    #[test]
    fn ratio_rejects_zero() {
        assert_eq!(ratio(1.0, 4.0, || "x".into()).unwrap(), 0.25);
        let err = ratio(1.0, 0.0, || "n(c) for class 1".into()).unwrap_err();
        assert!(err.to_string().contains("n(c) for class 1"));
    }

    #[test]
    fn method_dispatch_matches_direct_predictors() {
        let domains = vec![Domain::range(0, 2), Domain::range(0, 2)];
        let model =
            FrequencyModel::train(&domains, &[vec![0, 0], vec![1, 1], vec![0, 1]], 0, &[1], 2.0)
                .unwrap();
        let row = [0, 1];
        assert_eq!(
            Method::NaiveBayes.predict(&model, &row).unwrap(),
            NaiveBayes.predict(&model, &row).unwrap()
        );
        assert_eq!(
            Method::NaiveCredal.predict(&model, &row).unwrap(),
            NaiveCredal.predict(&model, &row).unwrap()
        );
        assert_eq!(
            Method::CredalDominance.predict(&model, &row).unwrap(),
            CredalDominance.predict(&model, &row).unwrap()
        );
        assert_eq!(Method::CredalDominance.name(), "credal_dominance");
    }
}
