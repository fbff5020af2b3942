use axum::{Router, middleware, routing::get};

use super::handlers::{get_category_distribution, get_dashboard_stats, get_top_schools};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/stats", get(get_dashboard_stats))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/top-schools", get(get_top_schools))
        .route("/category-distribution", get(get_category_distribution))
        .merge(protected)
}
