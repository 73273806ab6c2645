use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::workout::entities::Intensity;

#[derive(Debug, Clone)]
pub struct AddWorkoutInput {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub workout_type: String,
    pub intensity: Intensity,
    pub duration: i32,
    pub met: f64,
    /// Computed from MET and the latest recorded weight when absent.
    pub calories: Option<i32>,
    pub completed: bool,
    pub title: String,
    pub memo: Option<String>,
}
