//! Per-row diagnostics and their column-wise means.

use credal_common::{Code, Result, Row};
use serde::Serialize;

use crate::classify::{FrequencyModel, Prediction, Predictor};

/// Outcome of one test row.
///
/// Fields that do not apply to a row are `None`: single accuracy only for
/// singleton predictions, set accuracy and set size only for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagnostic {
    pub accuracy: f64,
    pub single_accuracy: Option<f64>,
    pub set_accuracy: Option<f64>,
    pub indeterminate_set_size: Option<f64>,
    pub determinacy: f64,
    /// Correctness divided by set size.
    pub discounted_accuracy: f64,
}

impl Diagnostic {
    pub fn from_outcome(correct: bool, set_size: usize) -> Self {
        let hit = if correct { 1.0 } else { 0.0 };
        let single = set_size == 1;
        Self {
            accuracy: hit,
            single_accuracy: single.then_some(hit),
            set_accuracy: (!single).then_some(hit),
            indeterminate_set_size: (!single).then_some(set_size as f64),
            determinacy: if single { 1.0 } else { 0.0 },
            discounted_accuracy: if set_size == 0 {
                0.0
            } else {
                hit / set_size as f64
            },
        }
    }

    /// Score a prediction against the row's true class position.
    pub fn from_prediction(prediction: &Prediction, true_index: usize) -> Self {
        Self::from_outcome(prediction.is_flagged(true_index), prediction.set_size())
    }

    pub fn fields(&self) -> [Option<f64>; 6] {
        [
            Some(self.accuracy),
            self.single_accuracy,
            self.set_accuracy,
            self.indeterminate_set_size,
            Some(self.determinacy),
            Some(self.discounted_accuracy),
        ]
    }
}

/// Predict one row and score it.
pub fn diagnose<P>(model: &FrequencyModel, row: &[Code], predictor: &P) -> Result<Diagnostic>
where
    P: Predictor + ?Sized,
{
    let prediction = predictor.predict(model, row)?;
    let true_index = model.true_class_index(row)?;
    Ok(Diagnostic::from_prediction(&prediction, true_index))
}

/// Column-wise mean of diagnostics, ignoring `None` entries.
///
/// A field is `None` when no row contributes to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DiagnosticSummary {
    pub rows: usize,
    pub accuracy: Option<f64>,
    pub single_accuracy: Option<f64>,
    pub set_accuracy: Option<f64>,
    pub indeterminate_set_size: Option<f64>,
    pub determinacy: Option<f64>,
    pub discounted_accuracy: Option<f64>,
}

fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

impl DiagnosticSummary {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let column = |i: usize| mean(diagnostics.iter().map(|d| d.fields()[i]));
        Self {
            rows: diagnostics.len(),
            accuracy: column(0),
            single_accuracy: column(1),
            set_accuracy: column(2),
            indeterminate_set_size: column(3),
            determinacy: column(4),
            discounted_accuracy: column(5),
        }
    }

    pub fn fields(&self) -> [Option<f64>; 6] {
        [
            self.accuracy,
            self.single_accuracy,
            self.set_accuracy,
            self.indeterminate_set_size,
            self.determinacy,
            self.discounted_accuracy,
        ]
    }

    /// Field names in [`fields`](Self::fields) order.
    pub const FIELD_NAMES: [&'static str; 6] = [
        "accuracy",
        "single_accuracy",
        "set_accuracy",
        "indeterminate_set_size",
        "determinacy",
        "discounted_accuracy",
    ];
}

/// Predict and score every row against one model (no held-out data).
pub fn evaluate_rows<P>(model: &FrequencyModel, rows: &[Row], predictor: &P) -> Result<DiagnosticSummary>
where
    P: Predictor + ?Sized,
{
    let diagnostics = rows
        .iter()
        .map(|row| diagnose(model, row, predictor))
        .collect::<Result<Vec<_>>>()?;
    Ok(DiagnosticSummary::from_diagnostics(&diagnostics))
}
