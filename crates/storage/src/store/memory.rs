use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::candidate::RegisterCandidateRequest;
use crate::dto::catalog::{CreateCategoryRequest, CreateProgramRequest};
use crate::dto::integrity::{RebuildReport, TotalDrift};
use crate::error::{Result, StorageError};
use crate::models::candidate::candidate_code;
use crate::models::{AwardEntry, Candidate, Category, NewAward, Program};

use super::ScoreStore;

/// A candidate's slice of the ledger together with its cached total.
///
/// Both live behind the same mutex so an entry and its increment are
/// published together.
#[derive(Debug, Default)]
struct Account {
    entries: Vec<AwardEntry>,
    total: i64,
    deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    fn ledger_total(&self) -> i64 {
        self.entries.iter().map(|e| e.points).sum()
    }
}

#[derive(Debug)]
struct CandidateSlot {
    profile: Candidate,
    account: Mutex<Account>,
}

impl CandidateSlot {
    fn snapshot(&self) -> Result<Candidate> {
        let account = self.account.lock().map_err(poisoned)?;

        let mut candidate = self.profile.clone();
        candidate.total_points = account.total;
        candidate.deleted_at = account.deleted_at;
        Ok(candidate)
    }
}

/// In-process store.
///
/// The candidate index is write-locked only to register a candidate; awards
/// lock just the target candidate's account.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    candidates: RwLock<HashMap<Uuid, Arc<CandidateSlot>>>,
    categories: RwLock<HashMap<Uuid, Category>>,
    programs: RwLock<HashMap<Uuid, Program>>,
    registration_seq: AtomicI64,
    ledger_seq: AtomicI64,
}

fn poisoned<T>(_: PoisonError<T>) -> StorageError {
    StorageError::Unavailable("in-memory store lock poisoned".to_string())
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, candidate_id: Uuid) -> Result<Arc<CandidateSlot>> {
        self.candidates
            .read()
            .map_err(poisoned)?
            .get(&candidate_id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Candidate"))
    }

    fn all_slots(&self) -> Result<Vec<Arc<CandidateSlot>>> {
        let index = self.candidates.read().map_err(poisoned)?;
        Ok(index.values().cloned().collect())
    }

    fn category_exists(&self, category_id: Uuid) -> Result<bool> {
        Ok(self
            .categories
            .read()
            .map_err(poisoned)?
            .contains_key(&category_id))
    }

    #[cfg(test)]
    pub(crate) fn overwrite_total(&self, candidate_id: Uuid, total: i64) -> Result<()> {
        let slot = self.slot(candidate_id)?;
        slot.account.lock().map_err(poisoned)?.total = total;
        Ok(())
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn register_candidate(&self, req: &RegisterCandidateRequest) -> Result<Candidate> {
        if !self.category_exists(req.category_id)? {
            return Err(StorageError::not_found("Category"));
        }

        let mut program_ids = req.program_ids.clone();
        program_ids.sort();
        program_ids.dedup();

        {
            let programs = self.programs.read().map_err(poisoned)?;
            if program_ids.iter().any(|id| !programs.contains_key(id)) {
                return Err(StorageError::not_found("Program"));
            }
        }

        let registration_seq = self.registration_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let candidate = Candidate {
            candidate_id: Uuid::new_v4(),
            candidate_code: candidate_code(registration_seq),
            registration_seq,
            name: req.name.trim().to_string(),
            school: req.school.trim().to_string(),
            category_id: req.category_id,
            participation_type: req.participation_type.clone(),
            program_ids,
            total_points: 0,
            created_at: Utc::now(),
            deleted_at: None,
        };

        let slot = Arc::new(CandidateSlot {
            profile: candidate.clone(),
            account: Mutex::new(Account::default()),
        });

        self.candidates
            .write()
            .map_err(poisoned)?
            .insert(candidate.candidate_id, slot);

        Ok(candidate)
    }

    async fn remove_candidate(&self, candidate_id: Uuid) -> Result<()> {
        let slot = self.slot(candidate_id)?;
        let mut account = slot.account.lock().map_err(poisoned)?;

        if account.deleted_at.is_some() {
            return Err(StorageError::not_found("Candidate"));
        }

        account.deleted_at = Some(Utc::now());
        Ok(())
    }

    async fn get_candidate(&self, candidate_id: Uuid) -> Result<Candidate> {
        let candidate = self.slot(candidate_id)?.snapshot()?;

        if candidate.is_active() {
            Ok(candidate)
        } else {
            Err(StorageError::not_found("Candidate"))
        }
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for slot in self.all_slots()? {
            let candidate = slot.snapshot()?;
            if candidate.is_active() {
                candidates.push(candidate);
            }
        }

        candidates.sort_by_key(|c| c.registration_seq);
        Ok(candidates)
    }

    async fn add_category(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let name = req.name.trim();
        let mut categories = self.categories.write().map_err(poisoned)?;

        if categories.values().any(|c| c.name == name) {
            return Err(StorageError::ConstraintViolation(format!(
                "Category '{name}' already exists"
            )));
        }

        let category = Category {
            category_id: Uuid::new_v4(),
            name: name.to_string(),
            description: req.description.clone(),
            created_at: Utc::now(),
        };
        categories.insert(category.category_id, category.clone());

        Ok(category)
    }

    async fn get_category(&self, category_id: Uuid) -> Result<Category> {
        self.categories
            .read()
            .map_err(poisoned)?
            .get(&category_id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Category"))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .categories
            .read()
            .map_err(poisoned)?
            .values()
            .cloned()
            .collect();

        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn add_program(&self, req: &CreateProgramRequest) -> Result<Program> {
        if !self.category_exists(req.category_id)? {
            return Err(StorageError::not_found("Category"));
        }

        let program = Program {
            program_id: Uuid::new_v4(),
            name: req.name.trim().to_string(),
            description: req.description.clone(),
            category_id: req.category_id,
            scheduled_date: req.scheduled_date,
            scheduled_time: req.scheduled_time.clone(),
            venue: req.venue.clone(),
            status: req.status_or_default().to_string(),
            created_at: Utc::now(),
        };

        self.programs
            .write()
            .map_err(poisoned)?
            .insert(program.program_id, program.clone());

        Ok(program)
    }

    async fn get_program(&self, program_id: Uuid) -> Result<Program> {
        self.programs
            .read()
            .map_err(poisoned)?
            .get(&program_id)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Program"))
    }

    async fn list_programs(&self) -> Result<Vec<Program>> {
        let mut programs: Vec<Program> = self
            .programs
            .read()
            .map_err(poisoned)?
            .values()
            .cloned()
            .collect();

        // Undated programs sort last, matching `NULLS LAST`.
        programs.sort_by(|a, b| {
            (a.scheduled_date.is_none(), a.scheduled_date, &a.name).cmp(&(
                b.scheduled_date.is_none(),
                b.scheduled_date,
                &b.name,
            ))
        });
        Ok(programs)
    }

    async fn record_award(&self, award: &NewAward) -> Result<AwardEntry> {
        if !self
            .programs
            .read()
            .map_err(poisoned)?
            .contains_key(&award.program_id)
        {
            return Err(StorageError::not_found("Program"));
        }

        let slot = self.slot(award.candidate_id)?;
        let mut account = slot.account.lock().map_err(poisoned)?;

        if account.deleted_at.is_some() {
            return Err(StorageError::not_found("Candidate"));
        }

        let new_total = account
            .total
            .checked_add(award.points)
            .ok_or_else(StorageError::total_overflow)?;

        let entry = AwardEntry {
            award_id: Uuid::new_v4(),
            sequence: self.ledger_seq.fetch_add(1, Ordering::SeqCst) + 1,
            candidate_id: award.candidate_id,
            program_id: award.program_id,
            points: award.points,
            remarks: award.remarks.clone(),
            created_at: Utc::now(),
        };

        account.entries.push(entry.clone());
        account.total = new_total;

        tracing::debug!(
            candidate_id = %award.candidate_id,
            sequence = entry.sequence,
            new_total,
            "award committed"
        );

        Ok(entry)
    }

    async fn ledger_for(&self, candidate_id: Uuid) -> Result<Vec<AwardEntry>> {
        let slot = self.slot(candidate_id)?;
        let account = slot.account.lock().map_err(poisoned)?;
        Ok(account.entries.clone())
    }

    async fn total_of(&self, candidate_id: Uuid) -> Result<i64> {
        let slot = self.slot(candidate_id)?;
        let account = slot.account.lock().map_err(poisoned)?;
        Ok(account.total)
    }

    async fn verify(&self) -> Result<Vec<TotalDrift>> {
        let mut slots = self.all_slots()?;
        slots.sort_by_key(|s| s.profile.registration_seq);

        let mut drift = Vec::new();
        for slot in slots {
            let account = slot.account.lock().map_err(poisoned)?;
            let ledger_total = account.ledger_total();
            if account.total != ledger_total {
                drift.push(TotalDrift {
                    candidate_id: slot.profile.candidate_id,
                    stored_total: account.total,
                    ledger_total,
                });
            }
        }

        Ok(drift)
    }

    async fn rebuild(&self) -> Result<RebuildReport> {
        let mut slots = self.all_slots()?;
        slots.sort_by_key(|s| s.profile.registration_seq);

        let mut corrected = Vec::new();
        for slot in &slots {
            let mut account = slot.account.lock().map_err(poisoned)?;
            let ledger_total = account.ledger_total();
            if account.total != ledger_total {
                corrected.push(TotalDrift {
                    candidate_id: slot.profile.candidate_id,
                    stored_total: account.total,
                    ledger_total,
                });
                account.total = ledger_total;
            }
        }

        Ok(RebuildReport {
            candidates_scanned: slots.len() as i64,
            corrected,
        })
    }
}
