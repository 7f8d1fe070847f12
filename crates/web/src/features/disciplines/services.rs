use sqlx::PgPool;
use storage::{
    dto::discipline::{BackfillShapesResponse, ProvisionBeltCategoriesResponse},
    error::Result,
    models::{Discipline, DisciplineLevel},
    regulations::RegulationTables,
    repository::discipline::DisciplineRepository,
    services::provisioning,
};

/// List all disciplines
pub async fn list_disciplines(pool: &PgPool) -> Result<Vec<Discipline>> {
    let repo = DisciplineRepository::new(pool);
    repo.list().await
}

/// Store inferred category shapes on disciplines that lack one
pub async fn backfill_shapes(pool: &PgPool) -> Result<BackfillShapesResponse> {
    provisioning::backfill_category_shapes(pool).await
}

/// Create the belt-category rows a discipline needs at a regulation level
pub async fn provision_belt_categories(
    pool: &PgPool,
    tables: &RegulationTables,
    discipline_id: i32,
    level: DisciplineLevel,
) -> Result<ProvisionBeltCategoriesResponse> {
    provisioning::provision_belt_categories(pool, tables, discipline_id, level).await
}
