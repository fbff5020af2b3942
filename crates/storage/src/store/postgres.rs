use async_trait::async_trait;
use uuid::Uuid;

use crate::Database;
use crate::dto::candidate::RegisterCandidateRequest;
use crate::dto::catalog::{CreateCategoryRequest, CreateProgramRequest};
use crate::dto::integrity::{RebuildReport, TotalDrift};
use crate::error::Result;
use crate::models::{AwardEntry, Candidate, Category, NewAward, Program};
use crate::repository::award::AwardRepository;
use crate::repository::candidate::CandidateRepository;
use crate::repository::catalog::CatalogRepository;
use crate::repository::integrity::IntegrityRepository;

use super::ScoreStore;

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgScoreStore {
    db: Database,
}

impl PgScoreStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScoreStore for PgScoreStore {
    async fn register_candidate(&self, req: &RegisterCandidateRequest) -> Result<Candidate> {
        CandidateRepository::new(self.db.pool()).create(req).await
    }

    async fn remove_candidate(&self, candidate_id: Uuid) -> Result<()> {
        CandidateRepository::new(self.db.pool())
            .soft_delete(candidate_id)
            .await
    }

    async fn get_candidate(&self, candidate_id: Uuid) -> Result<Candidate> {
        CandidateRepository::new(self.db.pool())
            .find_active(candidate_id)
            .await
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        CandidateRepository::new(self.db.pool()).list_active().await
    }

    async fn add_category(&self, req: &CreateCategoryRequest) -> Result<Category> {
        CatalogRepository::new(self.db.pool())
            .create_category(req)
            .await
    }

    async fn get_category(&self, category_id: Uuid) -> Result<Category> {
        CatalogRepository::new(self.db.pool())
            .find_category(category_id)
            .await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        CatalogRepository::new(self.db.pool())
            .list_categories()
            .await
    }

    async fn add_program(&self, req: &CreateProgramRequest) -> Result<Program> {
        CatalogRepository::new(self.db.pool())
            .create_program(req)
            .await
    }

    async fn get_program(&self, program_id: Uuid) -> Result<Program> {
        CatalogRepository::new(self.db.pool())
            .find_program(program_id)
            .await
    }

    async fn list_programs(&self) -> Result<Vec<Program>> {
        CatalogRepository::new(self.db.pool()).list_programs().await
    }

    async fn record_award(&self, award: &NewAward) -> Result<AwardEntry> {
        AwardRepository::new(self.db.pool()).record(award).await
    }

    async fn ledger_for(&self, candidate_id: Uuid) -> Result<Vec<AwardEntry>> {
        AwardRepository::new(self.db.pool())
            .list_for_candidate(candidate_id)
            .await
    }

    async fn total_of(&self, candidate_id: Uuid) -> Result<i64> {
        AwardRepository::new(self.db.pool())
            .total_of(candidate_id)
            .await
    }

    async fn verify(&self) -> Result<Vec<TotalDrift>> {
        IntegrityRepository::new(self.db.pool()).find_drift().await
    }

    async fn rebuild(&self) -> Result<RebuildReport> {
        IntegrityRepository::new(self.db.pool()).rebuild().await
    }
}
