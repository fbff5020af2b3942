use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A candidate whose cached total differs from its ledger sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TotalDrift {
    pub candidate_id: Uuid,
    pub stored_total: i64,
    pub ledger_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RebuildReport {
    pub candidates_scanned: i64,
    pub corrected: Vec<TotalDrift>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IntegrityReport {
    pub consistent: bool,
    pub drift: Vec<TotalDrift>,
}
