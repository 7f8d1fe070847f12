use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub city: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}

/// Response containing competition details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub competition_id: i32,
    pub name: String,
    pub city: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: chrono::NaiveDateTime,
}

impl CreateCompetitionRequest {
    /// Additional validation that requires multiple fields
    pub fn validate_dates(&self) -> Result<(), &'static str> {
        if let (Some(end), Some(start)) = (self.end_date, self.start_date) {
            if end < start {
                return Err("End date must be on or after start date");
            }
        }

        Ok(())
    }
}

impl From<crate::models::Competition> for CompetitionResponse {
    fn from(comp: crate::models::Competition) -> Self {
        Self {
            competition_id: comp.competition_id,
            name: comp.name,
            city: comp.city,
            start_date: comp.start_date,
            end_date: comp.end_date,
            created_at: comp.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> CreateCompetitionRequest {
        CreateCompetitionRequest {
            name: name.to_string(),
            city: None,
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(request("").validate().is_err());
        assert!(request("Первенство города").validate().is_ok());
    }

    #[test]
    fn test_rejects_end_before_start() {
        let mut req = request("Кубок федерации");
        req.start_date = NaiveDate::from_ymd_opt(2026, 5, 10);
        req.end_date = NaiveDate::from_ymd_opt(2026, 5, 9);
        assert!(req.validate_dates().is_err());

        req.end_date = NaiveDate::from_ymd_opt(2026, 5, 10);
        assert!(req.validate_dates().is_ok());
    }
}
