use sqlx::PgPool;

use crate::dto::integrity::{RebuildReport, TotalDrift};
use crate::error::Result;

const DRIFT_QUERY: &str = r#"
    SELECT
        c.candidate_id,
        c.total_points AS stored_total,
        COALESCE(SUM(a.points), 0)::BIGINT AS ledger_total
    FROM candidates c
    LEFT JOIN award_entries a ON a.candidate_id = c.candidate_id
    GROUP BY c.candidate_id, c.total_points, c.registration_seq
    HAVING c.total_points <> COALESCE(SUM(a.points), 0)
    ORDER BY c.registration_seq
"#;

/// Reconciles cached candidate totals with the award ledger
pub struct IntegrityRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> IntegrityRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_drift(&self) -> Result<Vec<TotalDrift>> {
        let drift = sqlx::query_as::<_, TotalDrift>(DRIFT_QUERY)
            .fetch_all(self.pool)
            .await?;

        Ok(drift)
    }

    /// Rewrite every drifted total from the ledger sum.
    ///
    /// All candidate rows are locked before the sums are read, so an award
    /// committing mid-rebuild either lands before the sums are taken or waits
    /// until the rebuild commits.
    pub async fn rebuild(&self) -> Result<RebuildReport> {
        let mut tx = self.pool.begin().await?;

        let locked: Vec<uuid::Uuid> = sqlx::query_scalar(
            "SELECT candidate_id FROM candidates ORDER BY candidate_id FOR UPDATE",
        )
        .fetch_all(&mut *tx)
        .await?;

        let drift = sqlx::query_as::<_, TotalDrift>(DRIFT_QUERY)
            .fetch_all(&mut *tx)
            .await?;

        for entry in &drift {
            sqlx::query("UPDATE candidates SET total_points = $2 WHERE candidate_id = $1")
                .bind(entry.candidate_id)
                .bind(entry.ledger_total)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(RebuildReport {
            candidates_scanned: locked.len() as i64,
            corrected: drift,
        })
    }
}
