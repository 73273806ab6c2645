use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        workout::{entities::WorkoutRecord, ports::WorkoutRepository},
    },
    entity::workout_records::{ActiveModel, Column, Entity},
    infrastructure::db::errors::map_insert_error,
};

#[derive(Debug, Clone)]
pub struct PostgresWorkoutRepository {
    pub db: DatabaseConnection,
}

impl PostgresWorkoutRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WorkoutRepository for PostgresWorkoutRepository {
    async fn create_workout(&self, workout: WorkoutRecord) -> Result<WorkoutRecord, CoreError> {
        let active_model = ActiveModel {
            id: Set(workout.id),
            user_id: Set(workout.user_id),
            date: Set(workout.date),
            category: Set(workout.category.clone()),
            workout_type: Set(workout.workout_type.clone()),
            intensity: Set(workout.intensity.as_str().to_string()),
            duration: Set(workout.duration),
            met: Set(workout.met),
            calories: Set(workout.calories),
            completed: Set(workout.completed),
            title: Set(workout.title.clone()),
            memo: Set(workout.memo.clone()),
            created_at: Set(workout.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_insert_error(e, "Failed to create workout", "Workout already exists"))?;

        WorkoutRecord::try_from(&created)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<WorkoutRecord>, CoreError> {
        let workouts = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get workouts: {}", e);
                CoreError::InternalServerError
            })?;

        workouts.iter().map(WorkoutRecord::try_from).collect()
    }
}
