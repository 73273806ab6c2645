use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    condition::{entities::ConditionScore, ports::ConditionService, score::calculate_condition_score},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_metric::ports::HealthMetricRepository,
    meal_plan::ports::CompletionClient,
    user::ports::UserRepository,
    weight::ports::WeightRecordRepository,
    workout::ports::WorkoutRepository,
};

impl<U, H, W, WO, HM, HC, LLM> ConditionService for Service<U, H, W, WO, HM, HC, LLM>
where
    U: UserRepository,
    H: HasherRepository,
    W: WeightRecordRepository,
    WO: WorkoutRepository,
    HM: HealthMetricRepository,
    HC: HealthCheckRepository,
    LLM: CompletionClient,
{
    async fn condition_score(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<ConditionScore, CoreError> {
        let user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let weight_logged = self
            .weight_repository
            .get_by_user(user.id)
            .await?
            .iter()
            .any(|record| record.date == date);

        let workout_completed = self
            .workout_repository
            .get_by_user(user.id)
            .await?
            .iter()
            .any(|workout| workout.date == date && workout.completed);

        let last_metric = self
            .health_metric_repository
            .get_latest_by_user(user.id)
            .await?;
        let sleep_hours = last_metric.as_ref().map_or(0.0, |m| m.sleep_hours);

        let score = calculate_condition_score(
            weight_logged,
            workout_completed,
            sleep_hours,
            last_metric.as_ref(),
        );

        debug!(user_id = %user.id, %date, score, "Condition score computed");

        Ok(ConditionScore {
            user_id: user.id,
            date,
            score,
            weight_logged,
            workout_completed,
            sleep_hours,
            blood_pressure_status: last_metric.as_ref().map(|m| m.blood_pressure_status()),
            blood_sugar_status: last_metric.as_ref().map(|m| m.blood_sugar_status()),
        })
    }
}
