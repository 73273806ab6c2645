use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    health_metric::status::{StatusLevel, blood_pressure_status, blood_sugar_status},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthMetric {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub systolic: i32,
    pub diastolic: i32,
    pub blood_sugar: i32,
    pub sleep_hours: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct HealthMetricConfig {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub systolic: i32,
    pub diastolic: i32,
    pub blood_sugar: i32,
    pub sleep_hours: f64,
}

impl HealthMetric {
    pub fn new(config: HealthMetricConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            date: config.date,
            systolic: config.systolic,
            diastolic: config.diastolic,
            blood_sugar: config.blood_sugar,
            sleep_hours: config.sleep_hours,
            created_at: now,
        }
    }

    pub fn blood_pressure_status(&self) -> StatusLevel {
        blood_pressure_status(self.systolic, self.diastolic)
    }

    pub fn blood_sugar_status(&self) -> StatusLevel {
        blood_sugar_status(self.blood_sugar)
    }
}
