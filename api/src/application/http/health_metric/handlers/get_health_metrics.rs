use axum::extract::{Path, State};
use healthhub_core::domain::health_metric::ports::HealthMetricService;
use uuid::Uuid;

use crate::application::http::{
    health_metric::validators::HealthMetricResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "health-metric",
    summary = "List health metrics",
    description = "Health metrics of a user, oldest first, with status labels.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = Vec<HealthMetricResponse>)
    ),
)]
pub async fn get_health_metrics(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Vec<HealthMetricResponse>>, ApiError> {
    let metrics = state
        .service
        .get_health_metrics(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        metrics.into_iter().map(HealthMetricResponse::from).collect(),
    ))
}
