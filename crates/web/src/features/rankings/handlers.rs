use axum::{
    Json,
    extract::State,
};
use storage::{
    dto::{
        common::LimitParams,
        ranking::{RankingEntry, Scoreboard},
    },
    services::ranking,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::extract::{ApiPath, ApiQuery};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/rankings/overall",
    params(LimitParams),
    responses(
        (status = 200, description = "Overall standings, highest total first, ties by registration order", body = Vec<RankingEntry>),
        (status = 400, description = "Negative limit")
    ),
    tag = "rankings"
)]
pub async fn get_overall_ranking(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<Vec<RankingEntry>>, WebError> {
    let limit = params.limit()?;

    let entries = ranking::rank_overall(state.store(), limit).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/rankings/categories/{category_id}",
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
        LimitParams
    ),
    responses(
        (status = 200, description = "Standings of one category by overall totals", body = Vec<RankingEntry>),
        (status = 400, description = "Negative limit"),
        (status = 404, description = "Category not found")
    ),
    tag = "rankings"
)]
pub async fn get_category_ranking(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<Vec<RankingEntry>>, WebError> {
    let limit = params.limit()?;

    let entries = ranking::rank_by_category(state.store(), category_id, limit).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/rankings/scoreboard",
    responses(
        (status = 200, description = "Overall top 20 and the top 10 of every category", body = Scoreboard)
    ),
    tag = "rankings"
)]
pub async fn get_scoreboard(State(state): State<AppState>) -> Result<Json<Scoreboard>, WebError> {
    let scoreboard = ranking::scoreboard(state.store()).await?;

    Ok(Json(scoreboard))
}
