//! K-fold cross-validation by index modulo.
//!
//! Row `i` is tested in fold `i % folds` and used for training in every
//! other fold. A fresh model is trained per fold.

use credal_common::{Error, Result, Row};
use serde::Serialize;
use tracing::debug;

use super::diagnostic::{Diagnostic, DiagnosticSummary};
use crate::classify::{Prediction, Predictor, TrainingSetup};

/// One held-out row's result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldOutcome {
    /// Index of the row in the full dataset.
    pub row: usize,
    pub fold: usize,
    pub prediction: Prediction,
    pub diagnostic: Diagnostic,
}

/// Split `rows` into (training rows, held-out row indices) for `fold`.
pub fn split(rows: &[Row], folds: usize, fold: usize) -> (Vec<Row>, Vec<usize>) {
    let mut train = Vec::with_capacity(rows.len());
    let mut test = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if index % folds == fold {
            test.push(index);
        } else {
            train.push(row.clone());
        }
    }
    (train, test)
}

fn check_folds(folds: usize) -> Result<()> {
    if folds == 0 {
        return Err(Error::invalid_parameter("folds", "must be at least 1"));
    }
    Ok(())
}

/// Per-row outcomes for every fold, fold-major.
///
/// Folds with no held-out rows (more folds than rows) contribute nothing.
pub fn cross_validate_outcomes<P>(
    predictor: &P,
    folds: usize,
    setup: &TrainingSetup,
    rows: &[Row],
) -> Result<Vec<FoldOutcome>>
where
    P: Predictor + ?Sized,
{
    check_folds(folds)?;
    let mut outcomes = Vec::with_capacity(rows.len());
    for fold in 0..folds {
        let (train, test) = split(rows, folds, fold);
        let model = setup.train(&train)?;
        for index in test {
            let row = &rows[index];
            let prediction = predictor.predict(&model, row)?;
            let diagnostic = Diagnostic::from_prediction(&prediction, model.true_class_index(row)?);
            outcomes.push(FoldOutcome {
                row: index,
                fold,
                prediction,
                diagnostic,
            });
        }
        debug!(
            method = predictor.name(),
            fold,
            train_rows = train.len(),
            "fold evaluated"
        );
    }
    Ok(outcomes)
}

/// Per-row outcomes of one model trained on every row (no held-out data).
///
/// All outcomes report fold 0.
pub fn resubstitution_outcomes<P>(
    predictor: &P,
    setup: &TrainingSetup,
    rows: &[Row],
) -> Result<Vec<FoldOutcome>>
where
    P: Predictor + ?Sized,
{
    let model = setup.train(rows)?;
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let prediction = predictor.predict(&model, row)?;
            let diagnostic = Diagnostic::from_prediction(&prediction, model.true_class_index(row)?);
            Ok(FoldOutcome {
                row: index,
                fold: 0,
                prediction,
                diagnostic,
            })
        })
        .collect()
}

/// Mean diagnostic over a set of outcomes.
pub fn summarize(outcomes: &[FoldOutcome]) -> DiagnosticSummary {
    let diagnostics: Vec<Diagnostic> = outcomes.iter().map(|o| o.diagnostic).collect();
    DiagnosticSummary::from_diagnostics(&diagnostics)
}

/// Pooled mean diagnostic over all folds.
pub fn cross_validate<P>(
    predictor: &P,
    folds: usize,
    setup: &TrainingSetup,
    rows: &[Row],
) -> Result<DiagnosticSummary>
where
    P: Predictor + ?Sized,
{
    let outcomes = cross_validate_outcomes(predictor, folds, setup, rows)?;
    Ok(summarize(&outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::NaiveCredal;
    use credal_common::Domain;

    fn setup() -> TrainingSetup {
        TrainingSetup::new(vec![Domain::range(0, 2), Domain::range(0, 2)], 0, vec![1], 2.0)
    }

    #[test]
    fn split_by_modulo() {
        let rows: Vec<Row> = (0..7).map(|i| vec![i % 2, 0]).collect();
        let (train, test) = split(&rows, 3, 1);
        assert_eq!(test, vec![1, 4]);
        assert_eq!(train.len(), 5);
    }

    #[test]
    fn every_row_tested_once() {
        let rows: Vec<Row> = (0..11).map(|i| vec![i % 2, (i / 2) % 2]).collect();
        let outcomes = cross_validate_outcomes(&NaiveCredal, 4, &setup(), &rows).unwrap();
        let mut seen: Vec<usize> = outcomes.iter().map(|o| o.row).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..11).collect::<Vec<_>>());
        assert!(outcomes.iter().all(|o| o.row % 4 == o.fold));
    }

    #[test]
    fn more_folds_than_rows() {
        let rows = vec![vec![0, 0], vec![1, 1]];
        let summary = cross_validate(&NaiveCredal, 5, &setup(), &rows).unwrap();
        assert_eq!(summary.rows, 2);
    }

    #[test]
    fn resubstitution_matches_evaluate_rows() {
        let rows: Vec<Row> = (0..9).map(|i| vec![i % 2, (i / 3) % 2]).collect();
        let outcomes = resubstitution_outcomes(&NaiveCredal, &setup(), &rows).unwrap();
        assert_eq!(outcomes.len(), 9);
        let model = setup().train(&rows).unwrap();
        let direct = crate::evaluate::evaluate_rows(&model, &rows, &NaiveCredal).unwrap();
        assert_eq!(summarize(&outcomes), direct);
    }

    #[test]
    fn zero_folds_rejected() {
        let err = cross_validate(&NaiveCredal, 0, &setup(), &[]).unwrap_err();
        assert_eq!(err.code(), 11);
    }

    #[test]
    fn empty_dataset_gives_empty_summary() {
        let summary = cross_validate(&NaiveCredal, 3, &setup(), &[]).unwrap();
        assert_eq!(summary.rows, 0);
        assert!(summary.accuracy.is_none());
    }

    #[test]
    fn domain_violation_in_training_fold_propagates() {
        let rows = vec![vec![0, 0], vec![0, 3], vec![1, 1]];
        assert!(cross_validate(&NaiveCredal, 3, &setup(), &rows).is_err());
    }
}
