use axum::{
    Router, middleware,
    routing::{delete, get},
};

use super::handlers::{
    get_candidate, get_candidate_total, list_candidates, register_candidate, remove_candidate,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_candidates).post(register_candidate))
        .route("/:candidate_id", delete(remove_candidate))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:candidate_id", get(get_candidate))
        .route("/:candidate_id/total", get(get_candidate_total))
        .merge(protected)
}
