use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health_metric::{entities::HealthMetric, ports::HealthMetricRepository},
    },
    entity::health_metrics::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthMetricRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthMetricRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthMetricRepository for PostgresHealthMetricRepository {
    async fn create_metric(&self, metric: HealthMetric) -> Result<HealthMetric, CoreError> {
        let active_model = ActiveModel {
            id: Set(metric.id),
            user_id: Set(metric.user_id),
            date: Set(metric.date),
            systolic: Set(metric.systolic),
            diastolic: Set(metric.diastolic),
            blood_sugar: Set(metric.blood_sugar),
            sleep_hours: Set(metric.sleep_hours),
            created_at: Set(metric.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create health metric: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(HealthMetric::from(created))
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<HealthMetric>, CoreError> {
        let metrics = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get health metrics: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(metrics.iter().map(HealthMetric::from).collect())
    }

    async fn get_latest_by_user(&self, user_id: Uuid) -> Result<Option<HealthMetric>, CoreError> {
        let metric = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get latest health metric: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(metric.map(HealthMetric::from))
    }
}
