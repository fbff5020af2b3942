use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Candidate, Category};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankingEntry {
    pub rank: i64,
    pub candidate: CandidateInfo,
    pub total_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CandidateInfo {
    pub candidate_id: Uuid,
    pub candidate_code: String,
    pub name: String,
    pub school: String,
    pub category_id: Uuid,
}

impl From<&Candidate> for CandidateInfo {
    fn from(candidate: &Candidate) -> Self {
        Self {
            candidate_id: candidate.candidate_id,
            candidate_code: candidate.candidate_code.clone(),
            name: candidate.name.clone(),
            school: candidate.school.clone(),
            category_id: candidate.category_id,
        }
    }
}

/// Standings of a single category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryStanding {
    pub category: Category,
    pub entries: Vec<RankingEntry>,
}

/// Overall leaders plus the leaders of every category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Scoreboard {
    pub overall: Vec<RankingEntry>,
    pub categories: Vec<CategoryStanding>,
}
