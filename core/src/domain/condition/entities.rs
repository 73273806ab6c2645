use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::health_metric::status::StatusLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConditionScore {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub score: u32,
    pub weight_logged: bool,
    pub workout_completed: bool,
    pub sleep_hours: f64,
    /// `None` until a health metric has been recorded.
    pub blood_pressure_status: Option<StatusLevel>,
    pub blood_sugar_status: Option<StatusLevel>,
}
