use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_condition::{__path_get_condition, get_condition},
    get_user::{__path_get_user, get_user},
    get_users::{__path_get_users, get_users},
    login::{__path_login, login},
    register_user::{__path_register_user, register_user},
    update_user::{__path_update_user, update_user},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(register_user, login, get_users, get_user, update_user, get_condition))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/register", root_path), post(register_user))
        .route(&format!("{}/login", root_path), post(login))
        .route(&format!("{}/users", root_path), get(get_users))
        .route(
            &format!("{}/users/{{user_id}}", root_path),
            get(get_user).put(update_user),
        )
        .route(
            &format!("{}/users/{{user_id}}/condition", root_path),
            get(get_condition),
        )
}
