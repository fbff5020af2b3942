use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{AwardEntry, NewAward};

const AWARD_COLUMNS: &str =
    "award_id, sequence, candidate_id, program_id, points, remarks, created_at";

pub struct AwardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AwardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append an award and apply it to the candidate's total in one transaction.
    ///
    /// The total is changed with an in-database increment, which row-locks the
    /// candidate until commit, so concurrent awards to the same candidate
    /// serialize while other candidates proceed in parallel.
    pub async fn record(&self, award: &NewAward) -> Result<AwardEntry> {
        let mut tx = self.pool.begin().await?;

        let program_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM programs WHERE program_id = $1)")
                .bind(award.program_id)
                .fetch_one(&mut *tx)
                .await?;

        if !program_exists {
            return Err(StorageError::not_found("Program"));
        }

        let new_total: Option<i64> = sqlx::query_scalar(
            "UPDATE candidates SET total_points = total_points + $2 \
             WHERE candidate_id = $1 AND deleted_at IS NULL \
             RETURNING total_points",
        )
        .bind(award.candidate_id)
        .bind(award.points)
        .fetch_optional(&mut *tx)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_numeric_overflow() {
                StorageError::total_overflow()
            } else {
                e
            }
        })?;

        let Some(new_total) = new_total else {
            return Err(StorageError::not_found("Candidate"));
        };

        let sql = format!(
            "INSERT INTO award_entries (candidate_id, program_id, points, remarks) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {AWARD_COLUMNS}"
        );

        let entry = sqlx::query_as::<_, AwardEntry>(&sql)
            .bind(award.candidate_id)
            .bind(award.program_id)
            .bind(award.points)
            .bind(&award.remarks)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            candidate_id = %award.candidate_id,
            sequence = entry.sequence,
            new_total,
            "award committed"
        );

        Ok(entry)
    }

    /// Ledger entries for a candidate, including removed candidates
    pub async fn list_for_candidate(&self, candidate_id: Uuid) -> Result<Vec<AwardEntry>> {
        self.ensure_candidate_exists(candidate_id).await?;

        let sql = format!(
            "SELECT {AWARD_COLUMNS} FROM award_entries \
             WHERE candidate_id = $1 ORDER BY sequence"
        );

        let entries = sqlx::query_as::<_, AwardEntry>(&sql)
            .bind(candidate_id)
            .fetch_all(self.pool)
            .await?;

        Ok(entries)
    }

    pub async fn total_of(&self, candidate_id: Uuid) -> Result<i64> {
        sqlx::query_scalar("SELECT total_points FROM candidates WHERE candidate_id = $1")
            .bind(candidate_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found("Candidate"))
    }

    async fn ensure_candidate_exists(&self, candidate_id: Uuid) -> Result<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM candidates WHERE candidate_id = $1)")
                .bind(candidate_id)
                .fetch_one(self.pool)
                .await?;

        if exists {
            Ok(())
        } else {
            Err(StorageError::not_found("Candidate"))
        }
    }
}
