use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{rebuild_totals, verify_totals};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .route("/", get(verify_totals))
        .route("/rebuild", post(rebuild_totals))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
