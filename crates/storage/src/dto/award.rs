use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Result, StorageError};
use crate::models::NewAward;

/// Largest magnitude accepted for a single award or correction.
pub const MAX_AWARD_POINTS: i64 = 1_000_000;

/// Request payload for recording an award
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordAwardRequest {
    pub candidate_id: Uuid,
    pub program_id: Uuid,

    /// Whole points; negative values record a correction
    #[schema(value_type = i64)]
    pub points: serde_json::Number,

    #[validate(length(max = 500, message = "Remarks must be at most 500 characters"))]
    pub remarks: Option<String>,
}

impl RecordAwardRequest {
    pub fn to_new_award(&self) -> Result<NewAward> {
        let points = parse_points(&self.points)?;

        let remarks = self
            .remarks
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(String::from);

        Ok(NewAward {
            candidate_id: self.candidate_id,
            program_id: self.program_id,
            points,
            remarks,
        })
    }
}

fn parse_points(points: &serde_json::Number) -> Result<i64> {
    let value = points
        .as_i64()
        .ok_or_else(|| StorageError::validation("points must be a whole number"))?;

    if value.abs() > MAX_AWARD_POINTS {
        return Err(StorageError::validation(format!(
            "points must be between -{MAX_AWARD_POINTS} and {MAX_AWARD_POINTS}"
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(points: serde_json::Value) -> RecordAwardRequest {
        serde_json::from_value(serde_json::json!({
            "candidate_id": Uuid::nil(),
            "program_id": Uuid::nil(),
            "points": points,
            "remarks": "  first place  ",
        }))
        .unwrap()
    }

    #[test]
    fn test_integer_points_are_accepted() {
        let award = request(serde_json::json!(15)).to_new_award().unwrap();
        assert_eq!(award.points, 15);
        assert_eq!(award.remarks.as_deref(), Some("first place"));
    }

    #[test]
    fn test_negative_correction_is_accepted() {
        let award = request(serde_json::json!(-5)).to_new_award().unwrap();
        assert_eq!(award.points, -5);
    }

    #[test]
    fn test_fractional_points_are_rejected() {
        let err = request(serde_json::json!(2.5)).to_new_award().unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_out_of_range_points_are_rejected() {
        let err = request(serde_json::json!(MAX_AWARD_POINTS + 1))
            .to_new_award()
            .unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_blank_remarks_become_none() {
        let mut req = request(serde_json::json!(1));
        req.remarks = Some("   ".to_string());
        assert_eq!(req.to_new_award().unwrap().remarks, None);
    }

    #[test]
    fn test_long_remarks_fail_validation() {
        let mut req = request(serde_json::json!(1));
        req.remarks = Some("x".repeat(501));
        assert!(req.validate().is_err());
    }
}
