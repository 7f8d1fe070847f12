use sqlx::PgPool;
use tracing::info;

use crate::dto::discipline::{BackfillShapesResponse, ProvisionBeltCategoriesResponse};
use crate::error::Result;
use crate::models::{CategoryShape, DisciplineLevel};
use crate::regulations::RegulationTables;
use crate::repository::discipline::DisciplineRepository;

/// Creates the belt-category rows a discipline needs before belt-based
/// generation can produce anything at the given level. Idempotent: rules
/// that already have a row are counted as existing, not duplicated.
pub async fn provision_belt_categories(
    pool: &PgPool,
    tables: &RegulationTables,
    discipline_id: i32,
    level: DisciplineLevel,
) -> Result<ProvisionBeltCategoriesResponse> {
    DisciplineRepository::new(pool)
        .find_by_id(discipline_id)
        .await?;

    let rules = tables.distinct_belt_rules(level);

    let mut tx = pool.begin().await?;
    let mut created = 0u64;
    let mut existing = 0u64;

    for rule in rules {
        let found = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT belt_category_id
            FROM belt_categories
            WHERE discipline_id = $1 AND belt_min = $2 AND belt_max = $3
            "#,
        )
        .bind(discipline_id)
        .bind(rule.min)
        .bind(rule.max)
        .fetch_optional(&mut *tx)
        .await?;

        if found.is_some() {
            existing += 1;
            continue;
        }

        sqlx::query(
            r#"
            INSERT INTO belt_categories (discipline_id, belt_min, belt_max, name)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(discipline_id)
        .bind(rule.min)
        .bind(rule.max)
        .bind(&rule.name)
        .execute(&mut *tx)
        .await?;

        created += 1;
    }

    tx.commit().await?;

    info!(
        discipline_id,
        level = %level,
        created,
        existing,
        "Provisioned belt categories"
    );

    Ok(ProvisionBeltCategoriesResponse { created, existing })
}

/// Stores an inferred category shape on every discipline that lacks one.
/// Migration helper for rows imported before the shape column existed;
/// afterwards the name heuristic is no longer consulted for those rows.
pub async fn backfill_category_shapes(pool: &PgPool) -> Result<BackfillShapesResponse> {
    let repo = DisciplineRepository::new(pool);
    let unclassified = repo.list_unclassified().await?;

    let mut updated = 0u64;
    for discipline in &unclassified {
        let shape = CategoryShape::infer(discipline.display_name());
        repo.set_category_shape(discipline.discipline_id, shape)
            .await?;
        info!(
            discipline_id = discipline.discipline_id,
            shape = %shape,
            "Backfilled category shape"
        );
        updated += 1;
    }

    Ok(BackfillShapesResponse { updated })
}
