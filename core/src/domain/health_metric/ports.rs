use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health_metric::{entities::HealthMetric, value_objects::AddHealthMetricInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthMetricRepository: Send + Sync {
    fn create_metric(
        &self,
        metric: HealthMetric,
    ) -> impl Future<Output = Result<HealthMetric, CoreError>> + Send;

    /// Metrics of one user ordered by date ascending.
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<HealthMetric>, CoreError>> + Send;

    fn get_latest_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<HealthMetric>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthMetricService: Send + Sync {
    fn add_health_metric(
        &self,
        input: AddHealthMetricInput,
    ) -> impl Future<Output = Result<HealthMetric, CoreError>> + Send;

    fn get_health_metrics(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<HealthMetric>, CoreError>> + Send;
}
