use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_health_metric::{__path_create_health_metric, create_health_metric},
    get_health_metrics::{__path_get_health_metrics, get_health_metrics},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_health_metric, get_health_metrics))]
pub struct HealthMetricApiDoc;

pub fn health_metric_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health-metrics", state.args.server.root_path),
            post(create_health_metric),
        )
        .route(
            &format!("{}/health-metrics/{{user_id}}", state.args.server.root_path),
            get(get_health_metrics),
        )
}
