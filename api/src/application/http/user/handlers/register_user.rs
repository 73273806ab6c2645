use axum::extract::State;
use healthhub_core::domain::user::{
    entities::User, ports::UserService, value_objects::RegisterUserInput,
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::RegisterUserValidator,
};

#[utoipa::path(
    post,
    path = "/register",
    tag = "user",
    summary = "Register user",
    description = "Creates a user account. The password is stored as an argon2 hash.",
    responses(
        (status = 201, body = User),
        (status = 409, description = "Email already registered")
    ),
    request_body = RegisterUserValidator
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .register(RegisterUserInput {
            email: payload.email,
            password: payload.password,
            name: payload.name,
            height: payload.height,
            target_weight: payload.target_weight,
            goal: payload.goal,
            age: payload.age,
            gender: payload.gender,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user))
}
