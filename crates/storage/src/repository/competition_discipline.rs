use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{CompetitionDiscipline, CompetitionDisciplineDetail, DisciplineLevel};

/// Repository for CompetitionDiscipline database operations
pub struct CompetitionDisciplineRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionDisciplineRepository<'a> {
    /// Create a new CompetitionDisciplineRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List active competition-discipline rows with their disciplines
    pub async fn list_active_with_disciplines(
        &self,
        competition_id: i32,
    ) -> Result<Vec<CompetitionDisciplineDetail>> {
        let rows = sqlx::query_as::<_, CompetitionDisciplineDetail>(
            r#"
            SELECT cd.competition_discipline_id, cd.competition_id, cd.discipline_level,
                   d.discipline_id, d.code, d.name, d.name_ru, d.category_shape, d.is_active
            FROM competition_disciplines cd
            JOIN disciplines d ON d.discipline_id = cd.discipline_id
            WHERE cd.competition_id = $1 AND cd.is_active = TRUE
            ORDER BY cd.competition_discipline_id
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Attach a discipline to a competition, reactivating and re-leveling the
    /// row if the pair already exists
    pub async fn attach(
        &self,
        competition_id: i32,
        discipline_id: i32,
        level: DisciplineLevel,
    ) -> Result<CompetitionDiscipline> {
        let row = sqlx::query_as::<_, CompetitionDiscipline>(
            r#"
            INSERT INTO competition_disciplines (competition_id, discipline_id, discipline_level, is_active)
            VALUES ($1, $2, $3, TRUE)
            ON CONFLICT (competition_id, discipline_id)
            DO UPDATE SET discipline_level = EXCLUDED.discipline_level, is_active = TRUE
            RETURNING competition_discipline_id, competition_id, discipline_id,
                      discipline_level, is_active
            "#,
        )
        .bind(competition_id)
        .bind(discipline_id)
        .bind(level.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23503") {
                    return StorageError::ConstraintViolation(
                        "Competition or discipline does not exist".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(row)
    }

    /// Deactivate a competition-discipline row
    pub async fn deactivate(&self, competition_id: i32, discipline_id: i32) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE competition_disciplines
            SET is_active = FALSE
            WHERE competition_id = $1 AND discipline_id = $2
            "#,
        )
        .bind(competition_id)
        .bind(discipline_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
