use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        candidate::{CandidateDetailResponse, CandidateTotalResponse, RegisterCandidateRequest},
        common::{PaginatedResponse, PaginationParams},
    },
    models::Candidate,
    services::candidates,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(PaginationParams),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Active candidates by name", body = PaginatedResponse<Candidate>),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "candidates"
)]
pub async fn list_candidates(
    State(state): State<AppState>,
    ApiQuery(pagination): ApiQuery<PaginationParams>,
) -> Result<Json<PaginatedResponse<Candidate>>, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let page = candidates::list_candidates(state.store(), &pagination).await?;

    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{candidate_id}",
    params(
        ("candidate_id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate with enrolled programs and award history", body = CandidateDetailResponse),
        (status = 404, description = "Candidate not found")
    ),
    tag = "candidates"
)]
pub async fn get_candidate(
    State(state): State<AppState>,
    ApiPath(candidate_id): ApiPath<Uuid>,
) -> Result<Json<CandidateDetailResponse>, WebError> {
    let detail = candidates::candidate_detail(state.store(), candidate_id).await?;

    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{candidate_id}/total",
    params(
        ("candidate_id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Current total points", body = CandidateTotalResponse),
        (status = 404, description = "Candidate not found")
    ),
    tag = "candidates"
)]
pub async fn get_candidate_total(
    State(state): State<AppState>,
    ApiPath(candidate_id): ApiPath<Uuid>,
) -> Result<Json<CandidateTotalResponse>, WebError> {
    let total = candidates::candidate_total(state.store(), candidate_id).await?;

    Ok(Json(total))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = RegisterCandidateRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Candidate registered", body = Candidate),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category or program not found")
    ),
    tag = "candidates"
)]
pub async fn register_candidate(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterCandidateRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let candidate = state.store().register_candidate(&req).await?;
    tracing::info!(
        candidate_id = %candidate.candidate_id,
        candidate_code = %candidate.candidate_code,
        "Candidate registered"
    );

    Ok((StatusCode::CREATED, Json(candidate)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/candidates/{candidate_id}",
    params(
        ("candidate_id" = Uuid, Path, description = "Candidate ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Candidate removed; awards stay in the ledger"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Candidate not found")
    ),
    tag = "candidates"
)]
pub async fn remove_candidate(
    State(state): State<AppState>,
    ApiPath(candidate_id): ApiPath<Uuid>,
) -> Result<StatusCode, WebError> {
    state.store().remove_candidate(candidate_id).await?;
    tracing::info!(candidate_id = %candidate_id, "Candidate removed");

    Ok(StatusCode::NO_CONTENT)
}
