use chrono::NaiveDate;
use healthhub_core::domain::health_metric::{entities::HealthMetric, status::StatusLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateHealthMetricValidator {
    pub user_id: Uuid,

    pub date: NaiveDate,

    #[validate(range(min = 40, max = 300, message = "systolic is out of range"))]
    pub systolic: i32,

    #[validate(range(min = 20, max = 200, message = "diastolic is out of range"))]
    pub diastolic: i32,

    /// Fasting, mg/dL
    #[validate(range(min = 10, max = 1000, message = "blood_sugar is out of range"))]
    pub blood_sugar: i32,

    #[validate(range(min = 0.0, max = 24.0, message = "sleep_hours must be between 0 and 24"))]
    pub sleep_hours: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StatusLabel {
    pub level: StatusLevel,
    pub label: String,
}

impl From<StatusLevel> for StatusLabel {
    fn from(level: StatusLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthMetricResponse {
    #[serde(flatten)]
    pub metric: HealthMetric,
    pub blood_pressure_status: StatusLabel,
    pub blood_sugar_status: StatusLabel,
}

impl From<HealthMetric> for HealthMetricResponse {
    fn from(metric: HealthMetric) -> Self {
        Self {
            blood_pressure_status: metric.blood_pressure_status().into(),
            blood_sugar_status: metric.blood_sugar_status().into(),
            metric,
        }
    }
}

#[cfg(test)]
mod tests {
    use healthhub_core::domain::health_metric::entities::HealthMetricConfig;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_response_carries_status_labels() {
        let metric = HealthMetric::new(HealthMetricConfig {
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            systolic: 132,
            diastolic: 85,
            blood_sugar: 140,
            sleep_hours: 6.0,
        });

        let body = serde_json::to_value(HealthMetricResponse::from(metric)).unwrap();

        assert_eq!(body["systolic"], 132);
        assert_eq!(
            body["blood_pressure_status"],
            json!({ "level": "warning", "label": "주의" })
        );
        assert_eq!(
            body["blood_sugar_status"],
            json!({ "level": "danger", "label": "위험" })
        );
    }
}
