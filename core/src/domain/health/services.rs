use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    health_metric::ports::HealthMetricRepository,
    meal_plan::ports::CompletionClient,
    user::ports::UserRepository,
    weight::ports::WeightRecordRepository,
    workout::ports::WorkoutRepository,
};

impl<U, H, W, WO, HM, HC, LLM> HealthCheckService for Service<U, H, W, WO, HM, HC, LLM>
where
    U: UserRepository,
    H: HasherRepository,
    W: WeightRecordRepository,
    WO: WorkoutRepository,
    HM: HealthMetricRepository,
    HC: HealthCheckRepository,
    LLM: CompletionClient,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
