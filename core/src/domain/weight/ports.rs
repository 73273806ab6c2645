use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    weight::{entities::WeightRecord, value_objects::AddWeightRecordInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait WeightRecordRepository: Send + Sync {
    fn create_record(
        &self,
        record: WeightRecord,
    ) -> impl Future<Output = Result<WeightRecord, CoreError>> + Send;

    /// Records of one user ordered by date ascending.
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WeightRecord>, CoreError>> + Send;

    fn get_latest_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<WeightRecord>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait WeightService: Send + Sync {
    fn add_weight_record(
        &self,
        input: AddWeightRecordInput,
    ) -> impl Future<Output = Result<WeightRecord, CoreError>> + Send;

    fn get_weight_records(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WeightRecord>, CoreError>> + Send;
}
