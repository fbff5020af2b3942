//! Shared fixtures for in-crate tests.

use uuid::Uuid;

use crate::dto::candidate::RegisterCandidateRequest;
use crate::dto::catalog::{CreateCategoryRequest, CreateProgramRequest};
use crate::models::{Candidate, NewAward};

use super::{MemoryScoreStore, ScoreStore};

pub struct Fixture {
    pub category_id: Uuid,
    pub second_category_id: Uuid,
    pub program_id: Uuid,
    pub second_program_id: Uuid,
}

impl Fixture {
    pub fn registration(&self, name: &str, school: &str) -> RegisterCandidateRequest {
        RegisterCandidateRequest {
            name: name.to_string(),
            school: school.to_string(),
            category_id: self.category_id,
            participation_type: "individual".to_string(),
            program_ids: vec![self.program_id],
        }
    }

    pub async fn register(&self, store: &MemoryScoreStore, name: &str, school: &str) -> Candidate {
        store
            .register_candidate(&self.registration(name, school))
            .await
            .unwrap()
    }

    pub async fn register_in(
        &self,
        store: &MemoryScoreStore,
        name: &str,
        school: &str,
        category_id: Uuid,
    ) -> Candidate {
        let mut req = self.registration(name, school);
        req.category_id = category_id;
        store.register_candidate(&req).await.unwrap()
    }
}

/// A store holding two categories ("Junior", "Senior") and two Junior programs
pub async fn seeded_store() -> (MemoryScoreStore, Fixture) {
    let store = MemoryScoreStore::new();

    let junior = store
        .add_category(&CreateCategoryRequest {
            name: "Junior".to_string(),
            description: Some("Classes 5 to 7".to_string()),
        })
        .await
        .unwrap();
    let senior = store
        .add_category(&CreateCategoryRequest {
            name: "Senior".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let mut program_ids = Vec::new();
    for name in ["Classical Vocal Solo", "Group Dance"] {
        let program = store
            .add_program(&CreateProgramRequest {
                name: name.to_string(),
                description: None,
                category_id: junior.category_id,
                scheduled_date: None,
                scheduled_time: None,
                venue: None,
                status: None,
            })
            .await
            .unwrap();
        program_ids.push(program.program_id);
    }

    let fixture = Fixture {
        category_id: junior.category_id,
        second_category_id: senior.category_id,
        program_id: program_ids[0],
        second_program_id: program_ids[1],
    };

    (store, fixture)
}

pub fn award(candidate: &Candidate, program_id: Uuid, points: i64) -> NewAward {
    NewAward {
        candidate_id: candidate.candidate_id,
        program_id,
        points,
        remarks: None,
    }
}
