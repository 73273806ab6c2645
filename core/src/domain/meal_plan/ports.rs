use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::MealPlanResult,
        value_objects::{CompletionRequest, MealRequest},
    },
};

/// Client for the external LLM completion service
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    /// Returns the raw text of the first completion choice.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for AI meal plan recommendations
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    /// Infallible by contract: upstream failures come back as a fallback plan.
    fn recommend(&self, request: MealRequest) -> impl Future<Output = MealPlanResult> + Send;
}
