use sqlx::PgPool;

use crate::error::Result;
use crate::models::AgeCategory;

/// Repository for AgeCategory database operations
pub struct AgeCategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AgeCategoryRepository<'a> {
    /// Create a new AgeCategoryRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List active age categories. Ordered by id so bucket deduplication
    /// always keeps the same representative row.
    pub async fn list_active(&self) -> Result<Vec<AgeCategory>> {
        let categories = sqlx::query_as::<_, AgeCategory>(
            r#"
            SELECT age_category_id, name, min_age, max_age, gender, is_active
            FROM age_categories
            WHERE is_active = TRUE
            ORDER BY age_category_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }
}
