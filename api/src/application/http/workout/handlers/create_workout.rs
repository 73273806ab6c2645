use axum::extract::State;
use healthhub_core::domain::workout::{
    entities::WorkoutRecord, ports::WorkoutService, value_objects::AddWorkoutInput,
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    workout::validators::CreateWorkoutValidator,
};

#[utoipa::path(
    post,
    path = "",
    tag = "workout",
    summary = "Add workout",
    description = "Stores a workout. Calories default to MET x latest weight x hours.",
    responses(
        (status = 201, body = WorkoutRecord),
        (status = 400, description = "Calories omitted and no weight recorded"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Workout id already used")
    ),
    request_body = CreateWorkoutValidator
)]
pub async fn create_workout(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateWorkoutValidator>,
) -> Result<Response<WorkoutRecord>, ApiError> {
    let workout = state
        .service
        .add_workout(AddWorkoutInput {
            id: payload.id,
            user_id: payload.user_id,
            date: payload.date,
            category: payload.category,
            workout_type: payload.workout_type,
            intensity: payload.intensity,
            duration: payload.duration,
            met: payload.met,
            calories: payload.calories,
            completed: payload.completed,
            title: payload.title,
            memo: payload.memo,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(workout))
}
