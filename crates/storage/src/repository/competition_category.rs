use sqlx::{FromRow, PgPool};

use crate::error::Result;
use crate::models::CompetitionCategory;

#[derive(FromRow)]
struct DisciplineCountRow {
    discipline_id: i32,
    count: i64,
}

#[derive(FromRow)]
struct GenderCountRow {
    gender: String,
    count: i64,
}

/// Repository for generated CompetitionCategory rows
pub struct CompetitionCategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionCategoryRepository<'a> {
    /// Create a new CompetitionCategoryRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List generated categories for a competition
    pub async fn list_for_competition(
        &self,
        competition_id: i32,
    ) -> Result<Vec<CompetitionCategory>> {
        let categories = sqlx::query_as::<_, CompetitionCategory>(
            r#"
            SELECT competition_category_id, competition_id, competition_discipline_id,
                   discipline_id, discipline_level, age_category_id, gender,
                   weight_category_id, belt_category_id, name, code,
                   min_participants, created_at
            FROM competition_categories
            WHERE competition_id = $1
            ORDER BY competition_category_id
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Delete all generated categories for a competition, returning the
    /// number of rows removed
    pub async fn delete_for_competition(&self, competition_id: i32) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM competition_categories
            WHERE competition_id = $1
            "#,
        )
        .bind(competition_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Total generated categories for a competition
    pub async fn count_total(&self, competition_id: i32) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM competition_categories
            WHERE competition_id = $1
            "#,
        )
        .bind(competition_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Category counts grouped by discipline
    pub async fn count_by_discipline(&self, competition_id: i32) -> Result<Vec<(i32, i64)>> {
        let rows = sqlx::query_as::<_, DisciplineCountRow>(
            r#"
            SELECT discipline_id, COUNT(*) AS count
            FROM competition_categories
            WHERE competition_id = $1
            GROUP BY discipline_id
            ORDER BY discipline_id
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| (r.discipline_id, r.count)).collect())
    }

    /// Category counts grouped by gender
    pub async fn count_by_gender(&self, competition_id: i32) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, GenderCountRow>(
            r#"
            SELECT gender, COUNT(*) AS count
            FROM competition_categories
            WHERE competition_id = $1
            GROUP BY gender
            ORDER BY gender
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| (r.gender, r.count)).collect())
    }
}
