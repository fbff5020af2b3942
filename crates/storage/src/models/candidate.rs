use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const PARTICIPATION_TYPES: &[&str] = &["individual", "group"];

/// A registered candidate.
///
/// `total_points` is a cache of the award ledger and is only ever changed by
/// recording an award or by rebuilding totals from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Candidate {
    pub candidate_id: Uuid,
    pub candidate_code: String,
    pub registration_seq: i64,
    pub name: String,
    pub school: String,
    pub category_id: Uuid,
    pub participation_type: String,
    pub program_ids: Vec<Uuid>,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Candidate {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Human-readable candidate code derived from the registration sequence.
pub fn candidate_code(registration_seq: i64) -> String {
    format!("C{}", 1000 + registration_seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_code_starts_at_c1001() {
        assert_eq!(candidate_code(1), "C1001");
        assert_eq!(candidate_code(42), "C1042");
        assert_eq!(candidate_code(12_000), "C13000");
    }
}
