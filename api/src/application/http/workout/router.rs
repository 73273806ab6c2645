use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_workout::{__path_create_workout, create_workout},
    get_workouts::{__path_get_workouts, get_workouts},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_workout, get_workouts))]
pub struct WorkoutApiDoc;

pub fn workout_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/workouts", state.args.server.root_path),
            post(create_workout),
        )
        .route(
            &format!("{}/workouts/{{user_id}}", state.args.server.root_path),
            get(get_workouts),
        )
}
