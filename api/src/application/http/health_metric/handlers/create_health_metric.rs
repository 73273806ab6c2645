use axum::extract::State;
use healthhub_core::domain::health_metric::{
    ports::HealthMetricService, value_objects::AddHealthMetricInput,
};

use crate::application::http::{
    health_metric::validators::{CreateHealthMetricValidator, HealthMetricResponse},
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
    path = "",
    tag = "health-metric",
    summary = "Add health metric",
    description = "Stores blood pressure, blood sugar and sleep for a day.",
    responses(
        (status = 201, body = HealthMetricResponse),
        (status = 404, description = "User not found")
    ),
    request_body = CreateHealthMetricValidator
)]
pub async fn create_health_metric(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateHealthMetricValidator>,
) -> Result<Response<HealthMetricResponse>, ApiError> {
    let metric = state
        .service
        .add_health_metric(AddHealthMetricInput {
            user_id: payload.user_id,
            date: payload.date,
            systolic: payload.systolic,
            diastolic: payload.diastolic,
            blood_sugar: payload.blood_sugar,
            sleep_hours: payload.sleep_hours,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(HealthMetricResponse::from(metric)))
}
