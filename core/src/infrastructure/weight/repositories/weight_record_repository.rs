use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        weight::{entities::WeightRecord, ports::WeightRecordRepository},
    },
    entity::weight_records::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresWeightRecordRepository {
    pub db: DatabaseConnection,
}

impl PostgresWeightRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WeightRecordRepository for PostgresWeightRecordRepository {
    async fn create_record(&self, record: WeightRecord) -> Result<WeightRecord, CoreError> {
        let active_model = ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            date: Set(record.date),
            weight: Set(record.weight),
            height: Set(record.height),
            bmi: Set(record.bmi),
            memo: Set(record.memo.clone()),
            created_at: Set(record.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create weight record: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(WeightRecord::from(created))
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<WeightRecord>, CoreError> {
        let records = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get weight records: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(records.iter().map(WeightRecord::from).collect())
    }

    async fn get_latest_by_user(&self, user_id: Uuid) -> Result<Option<WeightRecord>, CoreError> {
        let record = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get latest weight record: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(record.map(WeightRecord::from))
    }
}
