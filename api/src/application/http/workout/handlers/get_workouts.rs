use axum::extract::{Path, State};
use healthhub_core::domain::workout::{entities::WorkoutRecord, ports::WorkoutService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "workout",
    summary = "List workouts",
    description = "Workouts of a user, oldest first.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = Vec<WorkoutRecord>)
    ),
)]
pub async fn get_workouts(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Vec<WorkoutRecord>>, ApiError> {
    let workouts = state
        .service
        .get_workouts(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(workouts))
}
