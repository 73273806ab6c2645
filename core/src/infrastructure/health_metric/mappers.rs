use crate::{domain::health_metric::entities::HealthMetric, entity::health_metrics};

impl From<&health_metrics::Model> for HealthMetric {
    fn from(model: &health_metrics::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            systolic: model.systolic,
            diastolic: model.diastolic,
            blood_sugar: model.blood_sugar,
            sleep_hours: model.sleep_hours,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<health_metrics::Model> for HealthMetric {
    fn from(model: health_metrics::Model) -> Self {
        Self::from(&model)
    }
}
