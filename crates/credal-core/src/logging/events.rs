//! Structured event vocabulary for logging.
//!
//! Every CLI event carries the run ID and pipeline stage.

use serde::{Deserialize, Serialize};

/// Pipeline stages of a `credal` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Startup and configuration.
    Init,
    /// Dataset loading.
    Load,
    /// Frequency model construction.
    Train,
    /// Single-row prediction.
    Predict,
    /// Cross-validation or resubstitution scoring.
    Evaluate,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Init => "init",
            Stage::Load => "load",
            Stage::Train => "train",
            Stage::Predict => "predict",
            Stage::Evaluate => "evaluate",
        };
        write!(f, "{}", s)
    }
}

/// Standard event names used in logging.
pub mod event_names {
    // Run lifecycle
    pub const RUN_STARTED: &str = "run.started";
    pub const RUN_FINISHED: &str = "run.finished";
    pub const RUN_FAILED: &str = "run.failed";

    // Config/init
    pub const CONFIG_LOADED: &str = "config.loaded";
    pub const CONFIG_DEFAULT_USED: &str = "config.default_used";

    // Load stage
    pub const DATASET_LOADED: &str = "dataset.loaded";

    // Train / predict stages
    pub const MODEL_TRAINED: &str = "model.trained";
    pub const PREDICTION_MADE: &str = "predict.done";

    // Evaluate stage
    pub const EVALUATE_STARTED: &str = "evaluate.started";
    pub const EVALUATE_FINISHED: &str = "evaluate.finished";
}

/// Correlation fields shared by every event of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    /// Unique ID for this invocation.
    pub run_id: String,
}

impl LogContext {
    pub fn new(run_id: impl Into<String>) -> Self {
        LogContext {
            run_id: run_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_serialization() {
        assert_eq!(serde_json::to_string(&Stage::Load).unwrap(), "\"load\"");
        assert_eq!(
            serde_json::to_string(&Stage::Evaluate).unwrap(),
            "\"evaluate\""
        );
    }

    #[test]
    fn test_stage_display_matches_serde() {
        for stage in [
            Stage::Init,
            Stage::Load,
            Stage::Train,
            Stage::Predict,
            Stage::Evaluate,
        ] {
            assert_eq!(
                serde_json::to_string(&stage).unwrap(),
                format!("\"{}\"", stage)
            );
        }
    }

    #[test]
    fn test_event_names_are_dotted() {
        for name in [
            event_names::RUN_STARTED,
            event_names::DATASET_LOADED,
            event_names::EVALUATE_FINISHED,
        ] {
            assert!(name.contains('.'));
        }
    }
}
