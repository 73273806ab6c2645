use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_metric::{
        entities::{HealthMetric, HealthMetricConfig},
        ports::{HealthMetricRepository, HealthMetricService},
        status::StatusLevel,
        value_objects::AddHealthMetricInput,
    },
    meal_plan::ports::CompletionClient,
    user::ports::UserRepository,
    weight::ports::WeightRecordRepository,
    workout::ports::WorkoutRepository,
};

impl<U, H, W, WO, HM, HC, LLM> HealthMetricService for Service<U, H, W, WO, HM, HC, LLM>
where
    U: UserRepository,
    H: HasherRepository,
    W: WeightRecordRepository,
    WO: WorkoutRepository,
    HM: HealthMetricRepository,
    HC: HealthCheckRepository,
    LLM: CompletionClient,
{
    async fn add_health_metric(
        &self,
        input: AddHealthMetricInput,
    ) -> Result<HealthMetric, CoreError> {
        let user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let metric = HealthMetric::new(HealthMetricConfig {
            user_id: user.id,
            date: input.date,
            systolic: input.systolic,
            diastolic: input.diastolic,
            blood_sugar: input.blood_sugar,
            sleep_hours: input.sleep_hours,
        });

        let metric = self.health_metric_repository.create_metric(metric).await?;

        let pressure = metric.blood_pressure_status();
        let sugar = metric.blood_sugar_status();
        if pressure == StatusLevel::Danger || sugar == StatusLevel::Danger {
            warn!(
                user_id = %metric.user_id,
                blood_pressure = pressure.label(),
                blood_sugar = sugar.label(),
                "Health metric in danger range"
            );
        } else {
            info!(user_id = %metric.user_id, "Health metric recorded");
        }

        Ok(metric)
    }

    async fn get_health_metrics(&self, user_id: Uuid) -> Result<Vec<HealthMetric>, CoreError> {
        self.health_metric_repository.get_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::test_support::{TestService, sample_user, service_with};

    fn input() -> AddHealthMetricInput {
        AddHealthMetricInput {
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            systolic: 118,
            diastolic: 76,
            blood_sugar: 92,
            sleep_hours: 7.5,
        }
    }

    #[tokio::test]
    async fn test_add_metric_for_known_user() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_id()
                .returning(|_| Box::pin(async { Ok(Some(sample_user())) }));
            ports
                .metrics
                .expect_create_metric()
                .returning(|metric| Box::pin(async move { Ok(metric) }));
        });

        let metric = service.add_health_metric(input()).await.unwrap();
        assert_eq!(metric.blood_pressure_status(), StatusLevel::Normal);
        assert_eq!(metric.sleep_hours, 7.5);
    }

    #[tokio::test]
    async fn test_add_metric_for_unknown_user() {
        let service: TestService = service_with(|ports| {
            ports
                .users
                .expect_get_by_id()
                .returning(|_| Box::pin(async { Ok(None) }));
            ports.metrics.expect_create_metric().never();
        });

        assert_eq!(
            service.add_health_metric(input()).await.unwrap_err(),
            CoreError::NotFound
        );
    }
}
