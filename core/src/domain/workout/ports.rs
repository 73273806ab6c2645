use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    workout::{entities::WorkoutRecord, value_objects::AddWorkoutInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait WorkoutRepository: Send + Sync {
    fn create_workout(
        &self,
        workout: WorkoutRecord,
    ) -> impl Future<Output = Result<WorkoutRecord, CoreError>> + Send;

    /// Workouts of one user ordered by date ascending.
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WorkoutRecord>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait WorkoutService: Send + Sync {
    fn add_workout(
        &self,
        input: AddWorkoutInput,
    ) -> impl Future<Output = Result<WorkoutRecord, CoreError>> + Send;

    fn get_workouts(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WorkoutRecord>, CoreError>> + Send;
}
