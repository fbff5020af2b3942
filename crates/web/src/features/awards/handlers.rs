use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{dto::award::RecordAwardRequest, models::AwardEntry, services::awards};
use validator::Validate;

use crate::error::WebError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/awards",
    request_body = RecordAwardRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Award appended to the ledger and applied to the candidate total", body = AwardEntry),
        (status = 400, description = "Points are not a whole number or remarks are too long"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Candidate or program not found"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "awards"
)]
pub async fn record_award(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RecordAwardRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = awards::record_award(state.store(), &req).await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}
