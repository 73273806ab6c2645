use axum::extract::State;
use healthhub_core::domain::meal_plan::{MealPlanResult, MealPlanService, MealRequest};

use crate::application::http::{
    meal_plan::validators::MealPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/meal",
    tag = "ai",
    summary = "Recommend a meal plan",
    description = "Generates a meal plan for the requested meal time. Upstream AI failures still return 200 with title \"AI 오류\" and the reason in the tip.",
    responses(
        (status = 200, body = MealPlanResult),
        (status = 400, description = "Malformed body or missing biometric field")
    ),
    request_body = MealPlanValidator
)]
pub async fn recommend_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MealPlanValidator>,
) -> Result<Response<MealPlanResult>, ApiError> {
    let result = state
        .service
        .recommend(MealRequest::from(payload))
        .await;

    Ok(Response::OK(result))
}
