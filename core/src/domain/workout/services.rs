use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_metric::ports::HealthMetricRepository,
    meal_plan::ports::CompletionClient,
    user::ports::UserRepository,
    weight::ports::WeightRecordRepository,
    workout::{
        entities::{WorkoutRecord, WorkoutRecordConfig, calculate_calories},
        ports::{WorkoutRepository, WorkoutService},
        value_objects::AddWorkoutInput,
    },
};

impl<U, H, W, WO, HM, HC, LLM> WorkoutService for Service<U, H, W, WO, HM, HC, LLM>
where
    U: UserRepository,
    H: HasherRepository,
    W: WeightRecordRepository,
    WO: WorkoutRepository,
    HM: HealthMetricRepository,
    HC: HealthCheckRepository,
    LLM: CompletionClient,
{
    async fn add_workout(&self, input: AddWorkoutInput) -> Result<WorkoutRecord, CoreError> {
        let user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let calories = match input.calories {
            Some(calories) => calories,
            None => {
                let latest = self
                    .weight_repository
                    .get_latest_by_user(user.id)
                    .await?
                    .ok_or_else(|| {
                        CoreError::Invalid(
                            "calories are required until a weight is recorded".to_string(),
                        )
                    })?;
                calculate_calories(input.met, latest.weight, input.duration)
            }
        };

        let workout = WorkoutRecord::new(WorkoutRecordConfig {
            id: input.id,
            user_id: user.id,
            date: input.date,
            category: input.category,
            workout_type: input.workout_type,
            intensity: input.intensity,
            duration: input.duration,
            met: input.met,
            calories,
            completed: input.completed,
            title: input.title,
            memo: input.memo,
        });

        let workout = self.workout_repository.create_workout(workout).await?;

        info!(
            user_id = %workout.user_id,
            workout_id = %workout.id,
            calories = workout.calories,
            "Workout recorded"
        );

        Ok(workout)
    }

    async fn get_workouts(&self, user_id: Uuid) -> Result<Vec<WorkoutRecord>, CoreError> {
        self.workout_repository.get_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        test_support::{TestService, sample_user, service_with},
        weight::entities::WeightRecord,
        workout::entities::Intensity,
    };

    fn running(calories: Option<i32>) -> AddWorkoutInput {
        AddWorkoutInput {
            id: None,
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            category: "유산소".to_string(),
            workout_type: "달리기".to_string(),
            intensity: Intensity::High,
            duration: 30,
            met: 9.8,
            calories,
            completed: true,
            title: "아침 러닝".to_string(),
            memo: None,
        }
    }

    #[tokio::test]
    async fn test_calories_from_latest_weight() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_id()
                .returning(|_| Box::pin(async { Ok(Some(sample_user())) }));
            ports.weights.expect_get_latest_by_user().returning(|user_id| {
                Box::pin(async move {
                    Ok(Some(WeightRecord::new(
                        user_id,
                        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                        70.0,
                        175.0,
                        None,
                    )))
                })
            });
            ports
                .workouts
                .expect_create_workout()
                .returning(|workout| Box::pin(async move { Ok(workout) }));
        });

        let workout = service.add_workout(running(None)).await.unwrap();
        assert_eq!(workout.calories, 343);
    }

    #[tokio::test]
    async fn test_explicit_calories_skip_weight_lookup() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_id()
                .returning(|_| Box::pin(async { Ok(Some(sample_user())) }));
            ports.weights.expect_get_latest_by_user().never();
            ports
                .workouts
                .expect_create_workout()
                .returning(|workout| Box::pin(async move { Ok(workout) }));
        });

        let workout = service.add_workout(running(Some(300))).await.unwrap();
        assert_eq!(workout.calories, 300);
    }

    #[tokio::test]
    async fn test_missing_weight_is_invalid() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_id()
                .returning(|_| Box::pin(async { Ok(Some(sample_user())) }));
            ports
                .weights
                .expect_get_latest_by_user()
                .returning(|_| Box::pin(async { Ok(None) }));
            ports.workouts.expect_create_workout().never();
        });

        let err = service.add_workout(running(None)).await.unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }
}
