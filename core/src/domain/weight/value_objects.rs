use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AddWeightRecordInput {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    /// Falls back to the user's profile height.
    pub height: Option<f64>,
    pub memo: Option<String>,
}
