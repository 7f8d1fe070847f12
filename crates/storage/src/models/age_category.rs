use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Reference age bracket. Several rows may map to the same canonical
/// age-group bucket; the generator keeps one representative per
/// (bucket, gender).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AgeCategory {
    pub age_category_id: i32,
    pub name: String,
    pub min_age: i32,
    pub max_age: i32,
    pub gender: String,
    pub is_active: bool,
}
