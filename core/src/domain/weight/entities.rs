use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    weight::bmi::{BmiStatus, calculate_bmi},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeightRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WeightRecord {
    pub fn new(
        user_id: Uuid,
        date: NaiveDate,
        weight: f64,
        height: f64,
        memo: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            date,
            weight,
            height,
            bmi: calculate_bmi(weight, height),
            memo,
            created_at: now,
        }
    }

    pub fn bmi_status(&self) -> BmiStatus {
        BmiStatus::from_bmi(self.bmi)
    }
}
