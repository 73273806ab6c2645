use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Intensity {
    #[serde(rename = "낮음")]
    Low,
    #[serde(rename = "보통")]
    Moderate,
    #[serde(rename = "높음")]
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "낮음",
            Intensity::Moderate => "보통",
            Intensity::High => "높음",
        }
    }
}

impl FromStr for Intensity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "낮음" => Ok(Intensity::Low),
            "보통" => Ok(Intensity::Moderate),
            "높음" => Ok(Intensity::High),
            other => Err(CoreError::Invalid(format!("unknown intensity: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub intensity: Intensity,
    /// Minutes
    pub duration: i32,
    pub met: f64,
    pub calories: i32,
    pub completed: bool,
    pub title: String,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WorkoutRecordConfig {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub workout_type: String,
    pub intensity: Intensity,
    pub duration: i32,
    pub met: f64,
    pub calories: i32,
    pub completed: bool,
    pub title: String,
    pub memo: Option<String>,
}

impl WorkoutRecord {
    pub fn new(config: WorkoutRecordConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: config.id.unwrap_or_else(|| Uuid::new_v7(timestamp)),
            user_id: config.user_id,
            date: config.date,
            category: config.category,
            workout_type: config.workout_type,
            intensity: config.intensity,
            duration: config.duration,
            met: config.met,
            calories: config.calories,
            completed: config.completed,
            title: config.title,
            memo: config.memo,
            created_at: now,
        }
    }
}

/// Energy burned: MET × body weight (kg) × hours, rounded.
pub fn calculate_calories(met: f64, weight_kg: f64, duration_min: i32) -> i32 {
    (met * weight_kg * (f64::from(duration_min) / 60.0)).round() as i32
}
