use chrono::NaiveDate;
use healthhub_core::domain::weight::{bmi::BmiStatus, entities::WeightRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWeightRecordValidator {
    pub user_id: Uuid,

    pub date: NaiveDate,

    #[validate(range(min = 20.0, max = 300.0, message = "weight must be in kilograms"))]
    pub weight: f64,

    /// Centimeters. Defaults to the user's profile height.
    #[serde(default)]
    #[validate(range(min = 50.0, max = 250.0, message = "height must be in centimeters"))]
    pub height: Option<f64>,

    #[serde(default)]
    pub memo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WeightRecordResponse {
    #[serde(flatten)]
    pub record: WeightRecord,
    pub bmi_status: BmiStatus,
}

impl From<WeightRecord> for WeightRecordResponse {
    fn from(record: WeightRecord) -> Self {
        Self {
            bmi_status: record.bmi_status(),
            record,
        }
    }
}
