use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::PARTICIPATION_TYPES;
use crate::models::{AwardEntry, Candidate, Program};

/// Request payload for registering a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterCandidateRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "School must be between 1 and 255 characters"
    ))]
    pub school: String,

    pub category_id: Uuid,

    #[validate(custom(function = "validate_participation_type"))]
    pub participation_type: String,

    #[serde(default)]
    pub program_ids: Vec<Uuid>,
}

fn validate_participation_type(value: &str) -> Result<(), validator::ValidationError> {
    if PARTICIPATION_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_participation_type"))
    }
}

/// Candidate profile with enrolled programs and award history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidateDetailResponse {
    pub candidate: Candidate,
    pub programs: Vec<Program>,
    pub awards: Vec<AwardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidateTotalResponse {
    pub candidate_id: Uuid,
    pub total_points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(participation_type: &str) -> RegisterCandidateRequest {
        RegisterCandidateRequest {
            name: "Asha Menon".to_string(),
            school: "Greenwood".to_string(),
            category_id: Uuid::nil(),
            participation_type: participation_type.to_string(),
            program_ids: Vec::new(),
        }
    }

    #[test]
    fn test_known_participation_types_pass() {
        assert!(request("individual").validate().is_ok());
        assert!(request("group").validate().is_ok());
    }

    #[test]
    fn test_unknown_participation_type_fails() {
        let errors = request("team").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("participation_type"));
    }

    #[test]
    fn test_empty_name_fails() {
        let mut req = request("individual");
        req.name = String::new();
        assert!(req.validate().is_err());
    }
}
