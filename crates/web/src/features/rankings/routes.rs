use axum::{Router, routing::get};

use super::handlers::{get_category_ranking, get_overall_ranking, get_scoreboard};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/overall", get(get_overall_ranking))
        .route("/categories/:category_id", get(get_category_ranking))
        .route("/scoreboard", get(get_scoreboard))
}
