use serde::Deserialize;
use tracing::warn;

use crate::domain::meal_plan::{
    entities::{MealPlanResult, Nutrition},
    errors::MealPlanFailure,
    value_objects::MealRequest,
};

/// Shape the model must produce. `totalKcal` only has to be a number: the
/// caller's target always wins.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMealPlan {
    title: String,
    breakfast: String,
    lunch: String,
    dinner: String,
    snack: String,
    #[allow(dead_code)]
    total_kcal: serde_json::Number,
    tip: String,
    nutrition: Nutrition,
}

pub fn try_validate(
    raw_text: &str,
    request: &MealRequest,
) -> Result<MealPlanResult, MealPlanFailure> {
    let raw: RawMealPlan = serde_json::from_str(raw_text)
        .map_err(|e| MealPlanFailure::MalformedOutput(e.to_string()))?;

    Ok(MealPlanResult {
        title: raw.title,
        breakfast: raw.breakfast,
        lunch: raw.lunch,
        dinner: raw.dinner,
        snack: raw.snack,
        total_kcal: request.target_kcal,
        tip: raw.tip,
        nutrition: raw.nutrition,
    })
}

/// Never fails: anything that does not match the schema becomes a fallback plan.
pub fn validate(raw_text: &str, request: &MealRequest) -> MealPlanResult {
    try_validate(raw_text, request).unwrap_or_else(|failure| {
        warn!(failure = failure.kind(), error = %failure, "Rejected meal plan output");
        MealPlanResult::fallback(request.target_kcal, &failure)
    })
}
