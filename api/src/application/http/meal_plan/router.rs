use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::recommend_meal::{__path_recommend_meal, recommend_meal};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(recommend_meal))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/ai/meal", state.args.server.root_path),
        post(recommend_meal),
    )
}
