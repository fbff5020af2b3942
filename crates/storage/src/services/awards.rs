use crate::dto::award::RecordAwardRequest;
use crate::error::{Result, StorageError};
use crate::models::AwardEntry;
use crate::store::ScoreStore;

/// Record an award: the only operation that changes a candidate's total
pub async fn record_award(store: &dyn ScoreStore, req: &RecordAwardRequest) -> Result<AwardEntry> {
    let award = req.to_new_award()?;

    match store.record_award(&award).await {
        Ok(entry) => {
            tracing::info!(
                candidate_id = %entry.candidate_id,
                program_id = %entry.program_id,
                points = entry.points,
                sequence = entry.sequence,
                "Award recorded"
            );
            Ok(entry)
        }
        Err(e @ (StorageError::NotFound(_) | StorageError::Validation(_))) => {
            tracing::warn!(
                candidate_id = %award.candidate_id,
                program_id = %award.program_id,
                "Award rejected: {}",
                e
            );
            Err(e)
        }
        Err(e) => Err(e),
    }
}
