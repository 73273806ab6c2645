use axum::extract::{Path, State};
use healthhub_core::domain::user::{
    entities::User, ports::UserService, value_objects::UpdateUserInput,
};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::UpdateUserValidator,
};

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "user",
    summary = "Update user",
    description = "Partially updates profile fields. An empty body returns the user unchanged.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = User),
        (status = 404, description = "User not found")
    ),
    request_body = UpdateUserValidator
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .update_user(
            user_id,
            UpdateUserInput {
                name: payload.name,
                height: payload.height,
                target_weight: payload.target_weight,
                goal: payload.goal,
                age: payload.age,
                gender: payload.gender,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
