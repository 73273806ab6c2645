use std::time::Duration;

use thiserror::Error;

/// Why a recommendation fell back. Callers never see this type; it only feeds
/// the fallback tip and the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MealPlanFailure {
    #[error("completion timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("completion request failed: {0}")]
    Completion(String),

    #[error("malformed completion output: {0}")]
    MalformedOutput(String),
}

impl MealPlanFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            MealPlanFailure::Timeout(_) => "timeout",
            MealPlanFailure::Completion(_) => "completion",
            MealPlanFailure::MalformedOutput(_) => "malformed_output",
        }
    }
}
