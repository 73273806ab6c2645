use axum::extract::State;
use healthhub_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness",
    description = "Returns the server time in milliseconds since the epoch.",
    responses(
        (status = 200, body = u64)
    ),
)]
pub async fn health_live(State(state): State<AppState>) -> Result<Response<u64>, ApiError> {
    let now = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(now))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness",
    description = "Pings the database.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database unreachable")
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
