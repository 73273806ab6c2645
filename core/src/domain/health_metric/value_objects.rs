use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AddHealthMetricInput {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub systolic: i32,
    pub diastolic: i32,
    pub blood_sugar: i32,
    pub sleep_hours: f64,
}
