use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, condition::entities::ConditionScore,
};

#[cfg_attr(test, mockall::automock)]
pub trait ConditionService: Send + Sync {
    fn condition_score(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> impl Future<Output = Result<ConditionScore, CoreError>> + Send;
}
