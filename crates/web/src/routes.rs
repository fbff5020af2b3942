use axum::Router;

use crate::features::{awards, candidates, catalog, dashboard, integrity, rankings};
use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub fn router(state: AppState, api_keys: ApiKeys) -> Router {
    Router::new()
        .nest("/api/awards", awards::routes::routes(api_keys.clone()))
        .nest("/api/rankings", rankings::routes::routes())
        .nest("/api/dashboard", dashboard::routes::routes(api_keys.clone()))
        .nest("/api/candidates", candidates::routes::routes(api_keys.clone()))
        .nest(
            "/api/categories",
            catalog::routes::category_routes(api_keys.clone()),
        )
        .nest("/api/programs", catalog::routes::program_routes(api_keys.clone()))
        .nest("/api/admin/integrity", integrity::routes::routes(api_keys))
        .with_state(state)
}
