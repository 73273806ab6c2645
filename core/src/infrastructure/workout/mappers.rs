use crate::{
    domain::{common::entities::app_errors::CoreError, workout::entities::WorkoutRecord},
    entity::workout_records,
};

impl TryFrom<&workout_records::Model> for WorkoutRecord {
    type Error = CoreError;

    fn try_from(model: &workout_records::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            category: model.category.clone(),
            workout_type: model.workout_type.clone(),
            intensity: model.intensity.parse()?,
            duration: model.duration,
            met: model.met,
            calories: model.calories,
            completed: model.completed,
            title: model.title.clone(),
            memo: model.memo.clone(),
            created_at: model.created_at.to_utc(),
        })
    }
}
