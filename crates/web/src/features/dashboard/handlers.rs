use axum::{
    Json,
    extract::State,
};
use chrono::Utc;
use storage::{
    dto::{
        common::LimitParams,
        dashboard::{CategoryShare, DashboardStats, SchoolStanding},
    },
    services::dashboard,
};

use crate::error::WebError;
use crate::extract::ApiQuery;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/dashboard/top-schools",
    params(LimitParams),
    responses(
        (status = 200, description = "Schools by summed candidate points", body = Vec<SchoolStanding>),
        (status = 400, description = "Negative limit")
    ),
    tag = "dashboard"
)]
pub async fn get_top_schools(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<Json<Vec<SchoolStanding>>, WebError> {
    let limit = params.limit()?;

    let schools = dashboard::top_schools(state.store(), limit).await?;

    Ok(Json(schools))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/category-distribution",
    responses(
        (status = 200, description = "Candidate count and share per category", body = Vec<CategoryShare>)
    ),
    tag = "dashboard"
)]
pub async fn get_category_distribution(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryShare>>, WebError> {
    let shares = dashboard::category_distribution(state.store()).await?;

    Ok(Json(shares))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Admin dashboard summary", body = DashboardStats),
        (status = 401, description = "Unauthorized")
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, WebError> {
    let stats = dashboard::dashboard_stats(state.store(), Utc::now()).await?;

    Ok(Json(stats))
}
