use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One immutable line of the award ledger.
///
/// Corrections are recorded as new entries carrying negative points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AwardEntry {
    pub award_id: Uuid,
    pub sequence: i64,
    pub candidate_id: Uuid,
    pub program_id: Uuid,
    pub points: i64,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An award that has passed request validation but is not yet in the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAward {
    pub candidate_id: Uuid,
    pub program_id: Uuid,
    pub points: i64,
    pub remarks: Option<String>,
}
