use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::program::PROGRAM_STATUSES;

/// Request payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Request payload for creating a program
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProgramRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub category_id: Uuid,

    pub scheduled_date: Option<NaiveDate>,

    #[validate(length(max = 50))]
    pub scheduled_time: Option<String>,

    #[validate(length(max = 255))]
    pub venue: Option<String>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

impl CreateProgramRequest {
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or("upcoming")
    }
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    if PROGRAM_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(status: Option<&str>) -> CreateProgramRequest {
        CreateProgramRequest {
            name: "Group Dance".to_string(),
            description: None,
            category_id: Uuid::nil(),
            scheduled_date: None,
            scheduled_time: None,
            venue: None,
            status: status.map(String::from),
        }
    }

    #[test]
    fn test_status_defaults_to_upcoming() {
        let req = program(None);
        assert!(req.validate().is_ok());
        assert_eq!(req.status_or_default(), "upcoming");
    }

    #[test]
    fn test_invalid_status_fails() {
        assert!(program(Some("cancelled")).validate().is_err());
        assert!(program(Some("completed")).validate().is_ok());
    }
}
