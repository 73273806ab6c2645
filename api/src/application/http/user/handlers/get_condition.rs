use axum::extract::{Path, Query, State};
use chrono::Utc;
use healthhub_core::domain::condition::{entities::ConditionScore, ports::ConditionService};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::ConditionQuery,
};

#[utoipa::path(
    get,
    path = "/users/{user_id}/condition",
    tag = "user",
    summary = "Daily condition score",
    description = "Scores a day from 0 to 100 using weight logging, completed workouts, sleep and the latest health metric.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ConditionQuery,
    ),
    responses(
        (status = 200, body = ConditionScore),
        (status = 404, description = "User not found")
    ),
)]
pub async fn get_condition(
    Path(user_id): Path<Uuid>,
    Query(query): Query<ConditionQuery>,
    State(state): State<AppState>,
) -> Result<Response<ConditionScore>, ApiError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let condition = state
        .service
        .condition_score(user_id, date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(condition))
}
