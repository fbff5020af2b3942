use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    create_category, create_program, get_category, get_program, list_categories, list_programs,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn category_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_category))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_categories))
        .route("/:category_id", get(get_category))
        .merge(protected)
}

pub fn program_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_program))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_programs))
        .route("/:program_id", get(get_program))
        .merge(protected)
}
