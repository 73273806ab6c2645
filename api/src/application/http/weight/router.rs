use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_weight_record::{__path_create_weight_record, create_weight_record},
    get_weight_records::{__path_get_weight_records, get_weight_records},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_weight_record, get_weight_records))]
pub struct WeightApiDoc;

pub fn weight_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/weight", state.args.server.root_path),
            post(create_weight_record),
        )
        .route(
            &format!("{}/weight/{{user_id}}", state.args.server.root_path),
            get(get_weight_records),
        )
}
