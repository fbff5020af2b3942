use axum::{Json, extract::State};
use storage::{
    dto::integrity::{IntegrityReport, RebuildReport},
    services::integrity,
};

use crate::error::WebError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/integrity",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Candidates whose stored total disagrees with the ledger", body = IntegrityReport),
        (status = 401, description = "Unauthorized")
    ),
    tag = "integrity"
)]
pub async fn verify_totals(
    State(state): State<AppState>,
) -> Result<Json<IntegrityReport>, WebError> {
    let report = integrity::verify_totals(state.store()).await?;

    if !report.consistent {
        tracing::error!(
            drifted = report.drift.len(),
            "Totals out of line with the ledger; POST /api/admin/integrity/rebuild to repair"
        );
    }

    Ok(Json(report))
}

#[utoipa::path(
    post,
    path = "/api/admin/integrity/rebuild",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Totals recomputed from the award ledger", body = RebuildReport),
        (status = 401, description = "Unauthorized")
    ),
    tag = "integrity"
)]
pub async fn rebuild_totals(
    State(state): State<AppState>,
) -> Result<Json<RebuildReport>, WebError> {
    let report = integrity::rebuild(state.store()).await?;

    Ok(Json(report))
}
