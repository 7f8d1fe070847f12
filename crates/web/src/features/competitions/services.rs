use sqlx::PgPool;
use storage::{
    dto::competition::CreateCompetitionRequest,
    error::Result,
    models::{Competition, CompetitionDiscipline, CompetitionDisciplineDetail, DisciplineLevel},
    repository::competition::CompetitionRepository,
    repository::competition_discipline::CompetitionDisciplineRepository,
};

/// List all competitions
pub async fn list_competitions(pool: &PgPool) -> Result<Vec<Competition>> {
    let repo = CompetitionRepository::new(pool);
    repo.list().await
}

/// Get competition by ID
pub async fn get_competition(pool: &PgPool, competition_id: i32) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.find_by_id(competition_id).await
}

/// Create a new competition
pub async fn create_competition(
    pool: &PgPool,
    request: &CreateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.create(request).await
}

/// List active disciplines attached to a competition
pub async fn list_disciplines(
    pool: &PgPool,
    competition_id: i32,
) -> Result<Vec<CompetitionDisciplineDetail>> {
    CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;

    let repo = CompetitionDisciplineRepository::new(pool);
    repo.list_active_with_disciplines(competition_id).await
}

/// Attach a discipline to a competition at a regulation level
pub async fn attach_discipline(
    pool: &PgPool,
    competition_id: i32,
    discipline_id: i32,
    level: DisciplineLevel,
) -> Result<CompetitionDiscipline> {
    CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;

    let repo = CompetitionDisciplineRepository::new(pool);
    repo.attach(competition_id, discipline_id, level).await
}

/// Deactivate a competition-discipline row
pub async fn detach_discipline(
    pool: &PgPool,
    competition_id: i32,
    discipline_id: i32,
) -> Result<()> {
    let repo = CompetitionDisciplineRepository::new(pool);
    repo.deactivate(competition_id, discipline_id).await
}
