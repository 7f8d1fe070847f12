use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for attaching a discipline to a competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AttachDisciplineRequest {
    pub discipline_id: i32,

    #[validate(custom(function = "validate_level"))]
    pub level: String,
}

/// Request payload for provisioning belt categories for a discipline
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProvisionBeltCategoriesRequest {
    #[validate(custom(function = "validate_level"))]
    pub level: String,
}

/// Outcome of a belt-category provisioning run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProvisionBeltCategoriesResponse {
    pub created: u64,
    pub existing: u64,
}

/// Outcome of a category-shape backfill run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackfillShapesResponse {
    pub updated: u64,
}

fn validate_level(level: &str) -> Result<(), validator::ValidationError> {
    const VALID_LEVELS: &[&str] = &["FESTIVAL", "OFFICIAL", "WORLD"];

    if VALID_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_level"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_level() {
        let req = AttachDisciplineRequest {
            discipline_id: 1,
            level: "NATIONAL".to_string(),
        };
        assert!(req.validate().is_err());

        let req = AttachDisciplineRequest {
            discipline_id: 1,
            level: "OFFICIAL".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
