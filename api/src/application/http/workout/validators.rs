use chrono::NaiveDate;
use healthhub_core::domain::workout::entities::Intensity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutValidator {
    /// Client-generated id, kept when provided.
    #[serde(default)]
    pub id: Option<Uuid>,

    pub user_id: Uuid,

    pub date: NaiveDate,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub workout_type: String,

    pub intensity: Intensity,

    /// Minutes
    #[validate(range(min = 1, max = 1440, message = "duration must be between 1 and 1440 minutes"))]
    pub duration: i32,

    #[validate(range(min = 0.5, max = 25.0, message = "met is out of range"))]
    pub met: f64,

    /// Computed from MET and the latest weight record when omitted.
    #[serde(default)]
    #[validate(range(min = 0, message = "calories cannot be negative"))]
    pub calories: Option<i32>,

    #[serde(default)]
    pub completed: bool,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub memo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_korean_intensity_and_type_field() {
        let payload: CreateWorkoutValidator = serde_json::from_value(serde_json::json!({
            "user_id": "0195a1b2-0000-7000-8000-000000000001",
            "date": "2025-03-02",
            "category": "유산소",
            "type": "달리기",
            "intensity": "높음",
            "duration": 30,
            "met": 9.8,
            "title": "아침 러닝"
        }))
        .unwrap();

        assert_eq!(payload.intensity, Intensity::High);
        assert_eq!(payload.workout_type, "달리기");
        assert_eq!(payload.calories, None);
        assert!(!payload.completed);
        assert!(payload.validate().is_ok());
    }
}
