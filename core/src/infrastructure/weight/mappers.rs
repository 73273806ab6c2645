use crate::{domain::weight::entities::WeightRecord, entity::weight_records};

impl From<&weight_records::Model> for WeightRecord {
    fn from(model: &weight_records::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            weight: model.weight,
            height: model.height,
            bmi: model.bmi,
            memo: model.memo.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<weight_records::Model> for WeightRecord {
    fn from(model: weight_records::Model) -> Self {
        Self::from(&model)
    }
}
