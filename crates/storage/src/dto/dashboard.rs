use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Program;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SchoolStanding {
    pub school: String,
    pub total_points: i64,
    pub candidate_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryShare {
    pub category: String,
    pub count: i64,
    /// Share of all candidates, rounded half-up to a whole percent
    pub percentage: i64,
}

/// Admin dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_candidates: i64,
    pub new_candidates: i64,
    pub total_programs: i64,
    pub completed_programs: i64,
    pub total_schools: i64,
    pub top_schools: Vec<SchoolStanding>,
    pub category_distribution: Vec<CategoryShare>,
    pub upcoming_programs: Vec<Program>,
}
