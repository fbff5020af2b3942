//! The award ledger, the aggregate totals derived from it, and the directory
//! lookups the ranking and dashboard services read.
//!
//! Both implementations guarantee that an award's ledger entry and the
//! matching total increment become visible together, that concurrent awards
//! to one candidate never lose an increment, and that awards to different
//! candidates do not contend on a shared lock.

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::candidate::RegisterCandidateRequest;
use crate::dto::catalog::{CreateCategoryRequest, CreateProgramRequest};
use crate::dto::integrity::{RebuildReport, TotalDrift};
use crate::error::Result;
use crate::models::{AwardEntry, Candidate, Category, NewAward, Program};

pub mod memory;
pub mod postgres;
#[cfg(test)]
pub(crate) mod testing;

pub use memory::MemoryScoreStore;
pub use postgres::PgScoreStore;

#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn register_candidate(&self, req: &RegisterCandidateRequest) -> Result<Candidate>;

    /// Soft-deletes a candidate. Its ledger entries are kept for audit.
    async fn remove_candidate(&self, candidate_id: Uuid) -> Result<()>;

    async fn get_candidate(&self, candidate_id: Uuid) -> Result<Candidate>;

    /// Active candidates in registration order
    async fn list_candidates(&self) -> Result<Vec<Candidate>>;

    async fn add_category(&self, req: &CreateCategoryRequest) -> Result<Category>;

    async fn get_category(&self, category_id: Uuid) -> Result<Category>;

    /// Categories ordered by name
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn add_program(&self, req: &CreateProgramRequest) -> Result<Program>;

    async fn get_program(&self, program_id: Uuid) -> Result<Program>;

    async fn list_programs(&self) -> Result<Vec<Program>>;

    /// Appends the award to the ledger and applies it to the candidate's
    /// total as one unit.
    async fn record_award(&self, award: &NewAward) -> Result<AwardEntry>;

    /// A candidate's ledger entries in ledger order
    async fn ledger_for(&self, candidate_id: Uuid) -> Result<Vec<AwardEntry>>;

    async fn total_of(&self, candidate_id: Uuid) -> Result<i64>;

    /// Candidates whose stored total disagrees with their ledger sum
    async fn verify(&self) -> Result<Vec<TotalDrift>>;

    /// Recomputes every stored total from the ledger.
    async fn rebuild(&self) -> Result<RebuildReport>;
}
