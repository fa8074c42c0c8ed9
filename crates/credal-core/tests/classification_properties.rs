//! Property-based tests for the classifiers on random categorical data.

use credal_common::{Domain, Row};
use credal_core::classify::{
    naive_bayes_prob, smoothed_naive_bayes_prob, CredalDominance, FrequencyModel, NaiveBayes,
    NaiveCredal, Predictor,
};
use proptest::prelude::*;

/// Class column 0 with three classes, then three attribute columns.
fn domains() -> Vec<Domain> {
    vec![
        Domain::range(0, 3),
        Domain::range(0, 2),
        Domain::range(0, 4),
        Domain::range(0, 3),
    ]
}

const ATTRIBUTES: [usize; 3] = [1, 2, 3];

fn row_strategy() -> impl Strategy<Value = Row> {
    (0i64..3, 0i64..2, 0i64..4, 0i64..3).prop_map(|(c, a, b, d)| vec![c, a, b, d])
}

fn train(rows: &[Row], s: f64) -> FrequencyModel {
    FrequencyModel::train(&domains(), rows, 0, &ATTRIBUTES, s).expect("valid rows")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn credal_bounds_are_ordered_probabilities(
        rows in prop::collection::vec(row_strategy(), 0..40),
        test in row_strategy(),
        s in 0.1f64..5.0,
    ) {
        let model = train(&rows, s);
        for (lower, upper) in NaiveCredal.bounds(&model, &test).unwrap() {
            prop_assert!(lower >= 0.0);
            prop_assert!(lower <= upper + 1e-12);
            prop_assert!(upper <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn best_lower_bound_class_is_always_kept(
        rows in prop::collection::vec(row_strategy(), 0..40),
        test in row_strategy(),
        s in 0.1f64..5.0,
    ) {
        let model = train(&rows, s);
        let bounds = NaiveCredal.bounds(&model, &test).unwrap();
        let best = bounds
            .iter()
            .enumerate()
            .max_by(|a, b| a.1 .0.total_cmp(&b.1 .0))
            .map(|(i, _)| i)
            .unwrap();
        prop_assert!(NaiveCredal.predict(&model, &test).unwrap().is_flagged(best));
    }

    #[test]
    fn predictions_are_never_empty(
        rows in prop::collection::vec(row_strategy(), 0..40),
        test in row_strategy(),
        s in 0.1f64..5.0,
    ) {
        let model = train(&rows, s);
        for predictor in [&NaiveBayes as &dyn Predictor, &NaiveCredal, &CredalDominance] {
            let prediction = predictor.predict(&model, &test).unwrap();
            prop_assert_eq!(prediction.flags().len(), 3);
            prop_assert!(prediction.set_size() >= 1, "{} returned no class", predictor.name());
        }
    }

    #[test]
    fn predictions_are_deterministic(
        rows in prop::collection::vec(row_strategy(), 1..40),
        test in row_strategy(),
    ) {
        let first = train(&rows, 2.0);
        let second = train(&rows, 2.0);
        prop_assert_eq!(
            CredalDominance.predict(&first, &test).unwrap(),
            CredalDominance.predict(&second, &test).unwrap()
        );
        prop_assert_eq!(
            NaiveCredal.predict(&first, &test).unwrap(),
            NaiveCredal.predict(&second, &test).unwrap()
        );
    }

    #[test]
    fn smoothing_vanishes_without_perturbation(
        rows in prop::collection::vec(row_strategy(), 1..40),
        test in row_strategy(),
    ) {
        let model = train(&rows, 0.0);
        for class in 0..3 {
            if model.class_count(class) == 0 {
                continue;
            }
            let smoothed = smoothed_naive_bayes_prob(&model, &test, class).unwrap();
            let raw = naive_bayes_prob(&model, &test, class).unwrap();
            prop_assert!((smoothed - raw).abs() <= 1e-12);
        }
    }
}
