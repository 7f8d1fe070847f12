use sqlx::PgPool;

use crate::error::Result;
use crate::models::BeltCategory;

/// Repository for BeltCategory database operations
pub struct BeltCategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BeltCategoryRepository<'a> {
    /// Create a new BeltCategoryRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List belt categories for a set of disciplines
    pub async fn list_for_disciplines(&self, discipline_ids: &[i32]) -> Result<Vec<BeltCategory>> {
        let categories = sqlx::query_as::<_, BeltCategory>(
            r#"
            SELECT belt_category_id, discipline_id, belt_min, belt_max, name
            FROM belt_categories
            WHERE discipline_id = ANY($1)
            ORDER BY belt_category_id
            "#,
        )
        .bind(discipline_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// List belt categories for one discipline
    pub async fn list_for_discipline(&self, discipline_id: i32) -> Result<Vec<BeltCategory>> {
        let categories = sqlx::query_as::<_, BeltCategory>(
            r#"
            SELECT belt_category_id, discipline_id, belt_min, belt_max, name
            FROM belt_categories
            WHERE discipline_id = $1
            ORDER BY belt_category_id
            "#,
        )
        .bind(discipline_id)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }
}
