use sqlx::PgPool;
use storage::{
    error::Result, models::AgeCategory, repository::age_category::AgeCategoryRepository,
};

/// List active age categories
pub async fn list_age_categories(pool: &PgPool) -> Result<Vec<AgeCategory>> {
    let repo = AgeCategoryRepository::new(pool);
    repo.list_active().await
}
