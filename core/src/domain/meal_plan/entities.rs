use std::fmt::Display;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::meal_plan::slot_policy::MealSlot;

pub const FALLBACK_TITLE: &str = "AI 오류";
pub const FALLBACK_TIP_PREFIX: &str = "AI 오류 발생";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub carbs: String,
    pub protein: String,
    pub fat: String,
}

/// Meal plan returned to the caller, whether produced by the model or synthesized
/// as a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResult {
    pub title: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
    pub total_kcal: u32,
    pub tip: String,
    pub nutrition: Nutrition,
}

impl MealPlanResult {
    /// Placeholder plan carrying the failure description in `tip`.
    pub fn fallback(total_kcal: u32, reason: impl Display) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            breakfast: String::new(),
            lunch: String::new(),
            dinner: String::new(),
            snack: String::new(),
            total_kcal,
            tip: format!("{FALLBACK_TIP_PREFIX}: {reason}"),
            nutrition: Nutrition::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_fallback(&self) -> bool {
        self.title == FALLBACK_TITLE && self.tip.starts_with(FALLBACK_TIP_PREFIX)
    }

    pub(crate) fn set_slot(&mut self, slot: MealSlot, value: String) {
        match slot {
            MealSlot::Breakfast => self.breakfast = value,
            MealSlot::Lunch => self.lunch = value,
            MealSlot::Dinner => self.dinner = value,
            MealSlot::Snack => self.snack = value,
        }
    }
}
