use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::candidate::RegisterCandidateRequest;
use crate::error::{Result, StorageError};
use crate::models::Candidate;
use crate::models::candidate::candidate_code;

const CANDIDATE_COLUMNS: &str = "candidate_id, candidate_code, registration_seq, \
     name, school, category_id, participation_type, program_ids, total_points, \
     created_at, deleted_at";

pub struct CandidateRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CandidateRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List active candidates in registration order
    pub async fn list_active(&self) -> Result<Vec<Candidate>> {
        let sql = format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates \
             WHERE deleted_at IS NULL ORDER BY registration_seq"
        );

        let candidates = sqlx::query_as::<_, Candidate>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(candidates)
    }

    /// Find an active candidate by ID
    pub async fn find_active(&self, id: Uuid) -> Result<Candidate> {
        let sql = format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates \
             WHERE candidate_id = $1 AND deleted_at IS NULL"
        );

        sqlx::query_as::<_, Candidate>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found("Candidate"))
    }

    /// Register a candidate, allocating its registration sequence and code
    pub async fn create(&self, req: &RegisterCandidateRequest) -> Result<Candidate> {
        let mut tx = self.pool.begin().await?;

        let category_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE category_id = $1)")
                .bind(req.category_id)
                .fetch_one(&mut *tx)
                .await?;

        if !category_exists {
            return Err(StorageError::not_found("Category"));
        }

        let mut program_ids = req.program_ids.clone();
        program_ids.sort();
        program_ids.dedup();

        let known_programs: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM programs WHERE program_id = ANY($1)")
                .bind(&program_ids)
                .fetch_one(&mut *tx)
                .await?;

        if known_programs != program_ids.len() as i64 {
            return Err(StorageError::not_found("Program"));
        }

        let registration_seq: i64 = sqlx::query_scalar(
            "SELECT nextval(pg_get_serial_sequence('candidates', 'registration_seq'))",
        )
        .fetch_one(&mut *tx)
        .await?;

        let sql = format!(
            "INSERT INTO candidates \
                 (registration_seq, candidate_code, name, school, category_id, \
                  participation_type, program_ids) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CANDIDATE_COLUMNS}"
        );

        let candidate = sqlx::query_as::<_, Candidate>(&sql)
            .bind(registration_seq)
            .bind(candidate_code(registration_seq))
            .bind(req.name.trim())
            .bind(req.school.trim())
            .bind(req.category_id)
            .bind(&req.participation_type)
            .bind(&program_ids)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(candidate)
    }

    /// Soft-delete a candidate; its award entries stay in the ledger
    pub async fn soft_delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "UPDATE candidates SET deleted_at = now() \
             WHERE candidate_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Candidate"));
        }

        Ok(())
    }
}
