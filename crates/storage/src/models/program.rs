use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const PROGRAM_STATUSES: &[&str] = &["upcoming", "ongoing", "completed"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Program {
    pub program_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<String>,
    pub venue: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Program {
    pub fn is_upcoming(&self) -> bool {
        self.status == "upcoming"
    }

    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}
