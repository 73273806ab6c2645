use crate::domain::meal_plan::slot_policy::DEFAULT_MEAL_TIME;

/// Sentinel for optional free-text preferences the caller left out.
pub const NONE_SENTINEL: &str = "없음";

#[derive(Debug, Clone, PartialEq)]
pub struct MealRequest {
    pub meal_time: String,
    pub notes: String,
    pub age: u32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub activity_level: String,
    pub goal: String,
    pub target_kcal: u32,
    pub allergies: String,
    pub preferences: String,
}

impl Default for MealRequest {
    fn default() -> Self {
        Self {
            meal_time: DEFAULT_MEAL_TIME.to_string(),
            notes: String::new(),
            age: 0,
            gender: String::new(),
            height: 0.0,
            weight: 0.0,
            activity_level: String::new(),
            goal: String::new(),
            target_kcal: 0,
            allergies: NONE_SENTINEL.to_string(),
            preferences: NONE_SENTINEL.to_string(),
        }
    }
}

/// Payload handed to the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub response_schema: serde_json::Value,
}
