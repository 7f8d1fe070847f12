use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Generated competition category. Natural key for upserts is
/// (competition_id, competition_discipline_id, age_category_id,
/// weight_category_id, belt_category_id); unpartitioned categories carry NULL
/// for both optional keys.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionCategory {
    pub competition_category_id: i32,
    pub competition_id: i32,
    pub competition_discipline_id: i32,
    pub discipline_id: i32,
    pub discipline_level: String,
    pub age_category_id: i32,
    pub gender: String,
    pub weight_category_id: Option<i32>,
    pub belt_category_id: Option<i32>,
    pub name: String,
    pub code: String,
    pub min_participants: i32,
    pub created_at: chrono::NaiveDateTime,
}
