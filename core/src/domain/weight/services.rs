use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_metric::ports::HealthMetricRepository,
    meal_plan::ports::CompletionClient,
    user::ports::UserRepository,
    weight::{
        entities::WeightRecord,
        ports::{WeightRecordRepository, WeightService},
        value_objects::AddWeightRecordInput,
    },
    workout::ports::WorkoutRepository,
};

impl<U, H, W, WO, HM, HC, LLM> WeightService for Service<U, H, W, WO, HM, HC, LLM>
where
    U: UserRepository,
    H: HasherRepository,
    W: WeightRecordRepository,
    WO: WorkoutRepository,
    HM: HealthMetricRepository,
    HC: HealthCheckRepository,
    LLM: CompletionClient,
{
    async fn add_weight_record(
        &self,
        input: AddWeightRecordInput,
    ) -> Result<WeightRecord, CoreError> {
        let user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let height = input.height.unwrap_or(user.height);
        if input.weight <= 0.0 || height <= 0.0 {
            return Err(CoreError::Invalid(
                "weight and height must be positive".to_string(),
            ));
        }

        let record = WeightRecord::new(user.id, input.date, input.weight, height, input.memo);
        let record = self.weight_repository.create_record(record).await?;

        info!(user_id = %record.user_id, bmi = record.bmi, "Weight recorded");

        Ok(record)
    }

    async fn get_weight_records(&self, user_id: Uuid) -> Result<Vec<WeightRecord>, CoreError> {
        self.weight_repository.get_by_user(user_id).await
    }
}
