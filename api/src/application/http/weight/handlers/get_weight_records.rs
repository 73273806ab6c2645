use axum::extract::{Path, State};
use healthhub_core::domain::weight::ports::WeightService;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    weight::validators::WeightRecordResponse,
};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "weight",
    summary = "List weight records",
    description = "Weight records of a user, oldest first.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = Vec<WeightRecordResponse>)
    ),
)]
pub async fn get_weight_records(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<Vec<WeightRecordResponse>>, ApiError> {
    let records = state
        .service
        .get_weight_records(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        records.into_iter().map(WeightRecordResponse::from).collect(),
    ))
}
