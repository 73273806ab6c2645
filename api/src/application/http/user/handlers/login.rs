use axum::extract::State;
use healthhub_core::domain::user::{entities::User, ports::UserService, value_objects::LoginInput};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::LoginValidator,
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "user",
    summary = "Log in",
    description = "Verifies credentials and returns the matching user.",
    responses(
        (status = 200, body = User),
        (status = 401, description = "Invalid email or password")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
