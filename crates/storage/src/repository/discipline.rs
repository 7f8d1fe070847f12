use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{CategoryShape, Discipline};

/// Repository for Discipline database operations
pub struct DisciplineRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DisciplineRepository<'a> {
    /// Create a new DisciplineRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all disciplines
    pub async fn list(&self) -> Result<Vec<Discipline>> {
        let disciplines = sqlx::query_as::<_, Discipline>(
            r#"
            SELECT discipline_id, code, name, name_ru, category_shape, is_active
            FROM disciplines
            ORDER BY discipline_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(disciplines)
    }

    /// Get a discipline by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Discipline> {
        let discipline = sqlx::query_as::<_, Discipline>(
            r#"
            SELECT discipline_id, code, name, name_ru, category_shape, is_active
            FROM disciplines
            WHERE discipline_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(discipline)
    }

    /// List disciplines that have no stored category shape yet
    pub async fn list_unclassified(&self) -> Result<Vec<Discipline>> {
        let disciplines = sqlx::query_as::<_, Discipline>(
            r#"
            SELECT discipline_id, code, name, name_ru, category_shape, is_active
            FROM disciplines
            WHERE category_shape IS NULL
            ORDER BY discipline_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(disciplines)
    }

    /// Store the category shape for a discipline
    pub async fn set_category_shape(&self, id: i32, shape: CategoryShape) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE disciplines
            SET category_shape = $2
            WHERE discipline_id = $1
            "#,
        )
        .bind(id)
        .bind(shape.as_str())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
