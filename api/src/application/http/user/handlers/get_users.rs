use axum::extract::State;
use healthhub_core::domain::user::{entities::User, ports::UserService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/users",
    tag = "user",
    summary = "List users",
    responses(
        (status = 200, body = Vec<User>)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<Response<Vec<User>>, ApiError> {
    let users = state.service.get_users().await.map_err(ApiError::from)?;

    Ok(Response::OK(users))
}
