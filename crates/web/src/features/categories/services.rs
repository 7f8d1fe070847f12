use sqlx::PgPool;
use storage::{
    dto::category::{CategoryStats, ClearCategoriesResponse, GenerationReport},
    error::Result,
    models::CompetitionCategory,
    regulations::RegulationTables,
    repository::competition::CompetitionRepository,
    repository::competition_category::CompetitionCategoryRepository,
    services::category_generation,
};

/// Regenerate the category set for a competition
pub async fn generate_categories(
    pool: &PgPool,
    tables: &RegulationTables,
    competition_id: i32,
) -> Result<GenerationReport> {
    category_generation::generate_categories(pool, tables, competition_id).await
}

/// Wipe all generated categories for a competition
pub async fn clear_categories(
    pool: &PgPool,
    competition_id: i32,
) -> Result<ClearCategoriesResponse> {
    category_generation::clear_categories(pool, competition_id).await
}

/// List generated categories for a competition
pub async fn list_categories(
    pool: &PgPool,
    competition_id: i32,
) -> Result<Vec<CompetitionCategory>> {
    CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;

    let repo = CompetitionCategoryRepository::new(pool);
    repo.list_for_competition(competition_id).await
}

/// Aggregated category counts for a competition
pub async fn get_category_stats(pool: &PgPool, competition_id: i32) -> Result<CategoryStats> {
    category_generation::get_category_stats(pool, competition_id).await
}
