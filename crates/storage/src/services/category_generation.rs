use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use sqlx::PgPool;
use tracing::{info, warn};

use crate::dto::category::{
    CategoryStats, ClearCategoriesResponse, DisciplineCategoryCount, GenderCategoryCount,
    GenerationReport,
};
use crate::error::Result;
use crate::models::{
    AgeCategory, BeltCategory, CategoryShape, CompetitionDisciplineDetail, DisciplineLevel, Gender,
    WeightCategory,
};
use crate::regulations::{AgeGroup, RegulationTables, WeightBand};
use crate::repository::age_category::AgeCategoryRepository;
use crate::repository::belt_category::BeltCategoryRepository;
use crate::repository::competition::CompetitionRepository;
use crate::repository::competition_category::CompetitionCategoryRepository;
use crate::repository::competition_discipline::CompetitionDisciplineRepository;

/// Every generated category opens with the same participant floor.
const MIN_PARTICIPANTS: i32 = 2;

/// Sub-partition a planned category carries. Weight bands become
/// get-or-create WeightCategory rows at apply time; belt partitions
/// reference rows that must already exist.
#[derive(Debug)]
enum PlannedPartition {
    None,
    Weight(WeightBand),
    Belt { belt_category_id: i32 },
}

/// One category the planner decided should exist. The code is finalized at
/// apply time because weight partitions only get their id there.
#[derive(Debug)]
struct PlannedCategory {
    competition_discipline_id: i32,
    discipline_id: i32,
    discipline_code: String,
    discipline_level: DisciplineLevel,
    age_category_id: i32,
    gender: Gender,
    partition: PlannedPartition,
    name: String,
}

/// Full output of the planning phase.
#[derive(Debug)]
struct CategoryPlan {
    entries: Vec<PlannedCategory>,
    disciplines_processed: u64,
    belt_rules_skipped: u64,
    unbucketed_age_rows: u64,
}

/// Regenerates the category set for a competition.
///
/// Planning is pure and runs over in-memory reference data; all writes then
/// happen inside a single transaction, so a failed run leaves the stored
/// category set untouched. Re-running on an unchanged competition refreshes
/// names and codes without creating duplicates.
pub async fn generate_categories(
    pool: &PgPool,
    tables: &RegulationTables,
    competition_id: i32,
) -> Result<GenerationReport> {
    CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;

    let discipline_entries = CompetitionDisciplineRepository::new(pool)
        .list_active_with_disciplines(competition_id)
        .await?;

    if discipline_entries.is_empty() {
        warn!(competition_id, "Competition has no active disciplines");
    }

    let age_categories = AgeCategoryRepository::new(pool).list_active().await?;

    let discipline_ids: Vec<i32> = discipline_entries
        .iter()
        .map(|e| e.discipline.discipline_id)
        .collect();
    let belt_categories = BeltCategoryRepository::new(pool)
        .list_for_disciplines(&discipline_ids)
        .await?;

    let plan = plan_categories(tables, &discipline_entries, &age_categories, &belt_categories)?;

    info!(
        competition_id,
        planned = plan.entries.len(),
        disciplines = plan.disciplines_processed,
        unbucketed_age_rows = plan.unbucketed_age_rows,
        "Applying category plan"
    );

    let mut tx = pool.begin().await?;
    let mut created = 0u64;
    let mut updated = 0u64;

    for planned in &plan.entries {
        let (weight_category_id, belt_category_id) = match &planned.partition {
            PlannedPartition::None => (None, None),
            PlannedPartition::Weight(band) => {
                let id = get_or_create_weight_category(
                    &mut tx,
                    planned.discipline_id,
                    band,
                    planned.gender,
                )
                .await?;
                (Some(id), None)
            }
            PlannedPartition::Belt { belt_category_id } => (None, Some(*belt_category_id)),
        };

        let partition_tag = match (weight_category_id, belt_category_id) {
            (Some(id), None) => Some(('W', id)),
            (None, Some(id)) => Some(('B', id)),
            _ => None,
        };
        let code = build_code(
            &planned.discipline_code,
            planned.age_category_id,
            partition_tag,
            planned.gender,
        );

        let inserted = upsert_category(
            &mut tx,
            competition_id,
            planned,
            weight_category_id,
            belt_category_id,
            &code,
        )
        .await?;

        if inserted {
            created += 1;
        } else {
            updated += 1;
        }
    }

    tx.commit().await?;

    info!(
        competition_id,
        created,
        updated,
        belt_rules_skipped = plan.belt_rules_skipped,
        "Category generation finished"
    );

    Ok(GenerationReport {
        created,
        updated,
        disciplines_processed: plan.disciplines_processed,
        belt_rules_skipped: plan.belt_rules_skipped,
        regulation_version: tables.version().to_string(),
    })
}

/// Hard-deletes every generated category for the competition.
pub async fn clear_categories(
    pool: &PgPool,
    competition_id: i32,
) -> Result<ClearCategoriesResponse> {
    CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;

    let deleted = CompetitionCategoryRepository::new(pool)
        .delete_for_competition(competition_id)
        .await?;

    info!(competition_id, deleted, "Cleared generated categories");

    Ok(ClearCategoriesResponse { deleted })
}

/// Aggregated category counts for a competition.
pub async fn get_category_stats(pool: &PgPool, competition_id: i32) -> Result<CategoryStats> {
    CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;

    let repo = CompetitionCategoryRepository::new(pool);
    let total = repo.count_total(competition_id).await?;
    let by_discipline = repo
        .count_by_discipline(competition_id)
        .await?
        .into_iter()
        .map(|(discipline_id, count)| DisciplineCategoryCount {
            discipline_id,
            count,
        })
        .collect();
    let by_gender = repo
        .count_by_gender(competition_id)
        .await?
        .into_iter()
        .map(|(gender, count)| GenderCategoryCount { gender, count })
        .collect();

    Ok(CategoryStats {
        total,
        by_discipline,
        by_gender,
    })
}

/// Pure planning phase: decides which categories should exist for the given
/// disciplines and age categories, without touching the database.
fn plan_categories(
    tables: &RegulationTables,
    discipline_entries: &[CompetitionDisciplineDetail],
    age_categories: &[AgeCategory],
    belt_categories: &[BeltCategory],
) -> Result<CategoryPlan> {
    let belt_index: HashMap<(i32, i32, i32), &BeltCategory> = belt_categories
        .iter()
        .map(|b| ((b.discipline_id, b.belt_min, b.belt_max), b))
        .collect();

    let mut entries = Vec::new();
    let mut belt_rules_skipped = 0u64;
    let mut unbucketed_age_rows = 0u64;

    // Several stored rows can describe the same bucket (separate "10yo" and
    // "11yo" rows); only the first-seen row represents each (bucket, gender).
    let mut seen_buckets: HashSet<(AgeGroup, Gender)> = HashSet::new();
    let mut representatives: Vec<(AgeGroup, Gender, &AgeCategory)> = Vec::new();
    for age in age_categories {
        let gender = Gender::from_str(&age.gender)?;
        let group = match AgeGroup::from_range(age.min_age, age.max_age) {
            Some(group) => group,
            None => {
                warn!(
                    age_category_id = age.age_category_id,
                    min_age = age.min_age,
                    max_age = age.max_age,
                    "Age category fits no bucket, treating as adults"
                );
                unbucketed_age_rows += 1;
                AgeGroup::Adults
            }
        };
        if seen_buckets.insert((group, gender)) {
            representatives.push((group, gender, age));
        }
    }

    for entry in discipline_entries {
        let level = DisciplineLevel::from_str(&entry.discipline_level)?;
        let shape = entry.discipline.shape();

        for &(group, gender, age) in &representatives {
            if !tables.is_eligible(level, group) {
                continue;
            }

            match shape {
                CategoryShape::Weight => {
                    let Some(bands) = tables.weight_bands(group, gender) else {
                        continue;
                    };
                    for band in bands {
                        entries.push(PlannedCategory {
                            competition_discipline_id: entry.competition_discipline_id,
                            discipline_id: entry.discipline.discipline_id,
                            discipline_code: entry.discipline.code.clone(),
                            discipline_level: level,
                            age_category_id: age.age_category_id,
                            gender,
                            name: build_name(
                                entry.discipline.display_name(),
                                &age.name,
                                Some(&band.display_name()),
                                gender,
                            ),
                            partition: PlannedPartition::Weight(band.clone()),
                        });
                    }
                }
                CategoryShape::Belt => {
                    let Some(rules) = tables.belt_rules(level, group) else {
                        continue;
                    };
                    for rule in rules {
                        let key = (entry.discipline.discipline_id, rule.min, rule.max);
                        let Some(belt) = belt_index.get(&key) else {
                            warn!(
                                discipline_id = entry.discipline.discipline_id,
                                belt_min = rule.min,
                                belt_max = rule.max,
                                "No belt category provisioned for rule, skipping"
                            );
                            belt_rules_skipped += 1;
                            continue;
                        };
                        entries.push(PlannedCategory {
                            competition_discipline_id: entry.competition_discipline_id,
                            discipline_id: entry.discipline.discipline_id,
                            discipline_code: entry.discipline.code.clone(),
                            discipline_level: level,
                            age_category_id: age.age_category_id,
                            gender,
                            name: build_name(
                                entry.discipline.display_name(),
                                &age.name,
                                Some(&belt.name),
                                gender,
                            ),
                            partition: PlannedPartition::Belt {
                                belt_category_id: belt.belt_category_id,
                            },
                        });
                    }
                }
                CategoryShape::Simple => {
                    entries.push(PlannedCategory {
                        competition_discipline_id: entry.competition_discipline_id,
                        discipline_id: entry.discipline.discipline_id,
                        discipline_code: entry.discipline.code.clone(),
                        discipline_level: level,
                        age_category_id: age.age_category_id,
                        gender,
                        name: build_name(entry.discipline.display_name(), &age.name, None, gender),
                        partition: PlannedPartition::None,
                    });
                }
            }
        }
    }

    Ok(CategoryPlan {
        entries,
        disciplines_processed: discipline_entries.len() as u64,
        belt_rules_skipped,
        unbucketed_age_rows,
    })
}

/// Composite display name: discipline, age category, optional partition and
/// gender label, tab-joined with empty segments dropped.
fn build_name(
    discipline_name: &str,
    age_name: &str,
    partition_name: Option<&str>,
    gender: Gender,
) -> String {
    let mut segments = vec![discipline_name, age_name];
    if let Some(partition) = partition_name {
        segments.push(partition);
    }
    segments.push(gender.label_ru());

    segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Composite machine code: uppercased 3-character discipline prefix, age
/// category id, optional `W<id>`/`B<id>` partition segment and gender letter.
fn build_code(
    discipline_code: &str,
    age_category_id: i32,
    partition: Option<(char, i32)>,
    gender: Gender,
) -> String {
    let prefix: String = discipline_code.to_uppercase().chars().take(3).collect();
    match partition {
        Some((tag, id)) => format!(
            "{prefix}_AGE{age_category_id}_{tag}{id}_{}",
            gender.code_letter()
        ),
        None => format!("{prefix}_AGE{age_category_id}_{}", gender.code_letter()),
    }
}

async fn get_or_create_weight_category(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    discipline_id: i32,
    band: &WeightBand,
    gender: Gender,
) -> Result<i32> {
    let max_weight = band.max.unwrap_or_else(WeightCategory::open_end_sentinel);

    let existing = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT weight_category_id
        FROM weight_categories
        WHERE discipline_id = $1 AND min_weight = $2 AND max_weight = $3 AND gender = $4
        "#,
    )
    .bind(discipline_id)
    .bind(band.min)
    .bind(max_weight)
    .bind(gender.as_str())
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let code = format!("W{}_{}", band.code_fragment(), gender.code_letter());
    let weight_category_id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO weight_categories (discipline_id, code, name, min_weight, max_weight, gender, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, TRUE)
        RETURNING weight_category_id
        "#,
    )
    .bind(discipline_id)
    .bind(&code)
    .bind(band.display_name())
    .bind(band.min)
    .bind(max_weight)
    .bind(gender.as_str())
    .fetch_one(&mut **tx)
    .await?;

    Ok(weight_category_id)
}

/// Upserts one category by its natural key. Returns true when a new row was
/// inserted, false when an existing row had its name/code refreshed.
async fn upsert_category(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    competition_id: i32,
    planned: &PlannedCategory,
    weight_category_id: Option<i32>,
    belt_category_id: Option<i32>,
    code: &str,
) -> Result<bool> {
    let existing = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT competition_category_id
        FROM competition_categories
        WHERE competition_id = $1
          AND competition_discipline_id = $2
          AND age_category_id = $3
          AND weight_category_id IS NOT DISTINCT FROM $4
          AND belt_category_id IS NOT DISTINCT FROM $5
        "#,
    )
    .bind(competition_id)
    .bind(planned.competition_discipline_id)
    .bind(planned.age_category_id)
    .bind(weight_category_id)
    .bind(belt_category_id)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(id) = existing {
        // The pair may have been re-leveled since the last run, so the level
        // is refreshed along with the name and code.
        sqlx::query(
            r#"
            UPDATE competition_categories
            SET name = $2, code = $3, discipline_level = $4
            WHERE competition_category_id = $1
            "#,
        )
        .bind(id)
        .bind(&planned.name)
        .bind(code)
        .bind(planned.discipline_level.as_str())
        .execute(&mut **tx)
        .await?;

        return Ok(false);
    }

    sqlx::query(
        r#"
        INSERT INTO competition_categories (
            competition_id, competition_discipline_id, discipline_id, discipline_level,
            age_category_id, gender, weight_category_id, belt_category_id,
            name, code, min_participants
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(competition_id)
    .bind(planned.competition_discipline_id)
    .bind(planned.discipline_id)
    .bind(planned.discipline_level.as_str())
    .bind(planned.age_category_id)
    .bind(planned.gender.as_str())
    .bind(weight_category_id)
    .bind(belt_category_id)
    .bind(&planned.name)
    .bind(code)
    .bind(MIN_PARTICIPANTS)
    .execute(&mut **tx)
    .await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::models::Discipline;

    fn tables() -> RegulationTables {
        RegulationTables::builtin().unwrap()
    }

    fn discipline(id: i32, code: &str, name_ru: &str, shape: Option<&str>) -> Discipline {
        Discipline {
            discipline_id: id,
            code: code.to_string(),
            name: code.to_string(),
            name_ru: Some(name_ru.to_string()),
            category_shape: shape.map(String::from),
            is_active: true,
        }
    }

    fn entry(cd_id: i32, discipline: Discipline, level: &str) -> CompetitionDisciplineDetail {
        CompetitionDisciplineDetail {
            competition_discipline_id: cd_id,
            competition_id: 1,
            discipline_level: level.to_string(),
            discipline,
        }
    }

    fn age(id: i32, name: &str, min: i32, max: i32, gender: &str) -> AgeCategory {
        AgeCategory {
            age_category_id: id,
            name: name.to_string(),
            min_age: min,
            max_age: max,
            gender: gender.to_string(),
            is_active: true,
        }
    }

    fn belt(id: i32, discipline_id: i32, min: i32, max: i32, name: &str) -> BeltCategory {
        BeltCategory {
            belt_category_id: id,
            discipline_id,
            belt_min: min,
            belt_max: max,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_weight_discipline_adult_male_yields_seven_bands() {
        let entries = vec![entry(10, discipline(1, "MSG", "Масоги", None), "FESTIVAL")];
        let ages = vec![age(4, "Мужчины 18-35 лет", 18, 35, "MALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 7);
        assert_eq!(plan.disciplines_processed, 1);
        assert_eq!(plan.belt_rules_skipped, 0);
        assert!(plan
            .entries
            .iter()
            .all(|e| matches!(e.partition, PlannedPartition::Weight(_))));
        assert_eq!(
            plan.entries[0].name,
            "Масоги\tМужчины 18-35 лет\t45-50 кг\tМужчины"
        );
        assert_eq!(
            plan.entries[6].name,
            "Масоги\tМужчины 18-35 лет\t85.1 кг и выше\tМужчины"
        );
    }

    #[test]
    fn test_belt_rules_without_provisioned_rows_are_skipped() {
        let entries = vec![entry(10, discipline(2, "HYO", "Пхумсэ", None), "OFFICIAL")];
        let ages = vec![age(4, "Мужчины", 18, 35, "MALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 0);
        assert_eq!(plan.belt_rules_skipped, 9);
        assert_eq!(plan.disciplines_processed, 1);
    }

    #[test]
    fn test_belt_discipline_with_provisioned_rows() {
        let entries = vec![entry(10, discipline(2, "HYO", "Пхумсэ", None), "OFFICIAL")];
        let ages = vec![age(4, "Мужчины", 18, 35, "MALE")];
        let belts: Vec<BeltCategory> = (0..9)
            .map(|i| {
                belt(
                    50 + i,
                    2,
                    101 + i,
                    101 + i,
                    &format!("{} дан", i + 1),
                )
            })
            .collect();

        let plan = plan_categories(&tables(), &entries, &ages, &belts).unwrap();

        assert_eq!(plan.entries.len(), 9);
        assert_eq!(plan.belt_rules_skipped, 0);
        assert!(matches!(
            plan.entries[0].partition,
            PlannedPartition::Belt {
                belt_category_id: 50
            }
        ));
        assert_eq!(plan.entries[0].name, "Пхумсэ\tМужчины\t1 дан\tМужчины");
    }

    #[test]
    fn test_world_level_skips_young_age_groups() {
        let entries = vec![entry(10, discipline(1, "MSG", "Масоги", None), "WORLD")];
        let ages = vec![age(2, "Юноши 10-11 лет", 10, 11, "MALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 0);
        assert_eq!(plan.disciplines_processed, 1);
    }

    #[test]
    fn test_official_level_skips_youngest_groups() {
        let entries = vec![entry(10, discipline(1, "MSG", "Масоги", None), "OFFICIAL")];
        let ages = vec![age(1, "Мальчики 6-7 лет", 6, 7, "MALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 0);
    }

    #[test]
    fn test_duplicate_bucket_rows_use_one_representative() {
        let entries = vec![entry(10, discipline(1, "MSG", "Масоги", None), "FESTIVAL")];
        let ages = vec![
            age(2, "Юноши 10 лет", 10, 10, "MALE"),
            age(3, "Юноши 11 лет", 11, 11, "MALE"),
        ];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        // The 10-11 male ladder has six bands, produced once.
        assert_eq!(plan.entries.len(), 6);
        assert!(plan.entries.iter().all(|e| e.age_category_id == 2));
    }

    #[test]
    fn test_simple_discipline_yields_single_category() {
        let entries = vec![entry(
            10,
            discipline(3, "PWR", "Силовое разбивание", None),
            "FESTIVAL",
        )];
        let ages = vec![age(4, "Мужчины", 18, 99, "MALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 1);
        assert!(matches!(plan.entries[0].partition, PlannedPartition::None));
        assert_eq!(
            plan.entries[0].name,
            "Силовое разбивание\tМужчины\tМужчины"
        );
    }

    #[test]
    fn test_unbucketed_age_rows_fall_back_to_adults() {
        let entries = vec![entry(
            10,
            discipline(3, "PWR", "Силовое разбивание", None),
            "FESTIVAL",
        )];
        let ages = vec![age(7, "Все возрасты", 5, 20, "MALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.unbucketed_age_rows, 1);
        assert_eq!(plan.entries.len(), 1);
        assert_eq!(plan.entries[0].age_category_id, 7);
    }

    #[test]
    fn test_stored_shape_overrides_name_heuristic() {
        // Name says weight, stored shape says simple: one category, not seven.
        let entries = vec![entry(
            10,
            discipline(1, "MSG", "Масоги", Some("SIMPLE")),
            "FESTIVAL",
        )];
        let ages = vec![age(4, "Мужчины", 18, 99, "MALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 1);
        assert!(matches!(plan.entries[0].partition, PlannedPartition::None));
    }

    #[test]
    fn test_mixed_disciplines_accumulate() {
        let entries = vec![
            entry(10, discipline(1, "MSG", "Масоги", None), "FESTIVAL"),
            entry(11, discipline(3, "PWR", "Силовое разбивание", None), "FESTIVAL"),
        ];
        let ages = vec![age(4, "Мужчины", 18, 99, "MALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 8);
        assert_eq!(plan.disciplines_processed, 2);
    }

    #[test]
    fn test_no_active_disciplines_plans_nothing() {
        let ages = vec![age(4, "Мужчины", 18, 99, "MALE")];

        let plan = plan_categories(&tables(), &[], &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 0);
        assert_eq!(plan.disciplines_processed, 0);
        assert_eq!(plan.belt_rules_skipped, 0);
    }

    #[test]
    fn test_releveled_pair_keeps_keys_and_carries_new_level() {
        // Re-attaching a discipline at a new level keeps the same
        // competition_discipline_id, so regeneration must refresh the level
        // on rows whose natural key survives.
        let ages = vec![age(4, "Мужчины", 18, 35, "MALE")];
        let d = || discipline(1, "MSG", "Масоги", None);

        let before =
            plan_categories(&tables(), &[entry(10, d(), "FESTIVAL")], &ages, &[]).unwrap();
        let after =
            plan_categories(&tables(), &[entry(10, d(), "OFFICIAL")], &ages, &[]).unwrap();

        assert_eq!(before.entries.len(), 7);
        assert_eq!(after.entries.len(), 7);
        for (old, new) in before.entries.iter().zip(&after.entries) {
            assert_eq!(old.competition_discipline_id, new.competition_discipline_id);
            assert_eq!(old.age_category_id, new.age_category_id);
            assert_eq!(old.discipline_level, DisciplineLevel::Festival);
            assert_eq!(new.discipline_level, DisciplineLevel::Official);
            match (&old.partition, &new.partition) {
                (PlannedPartition::Weight(a), PlannedPartition::Weight(b)) => assert_eq!(a, b),
                _ => panic!("expected weight partitions"),
            }
        }
    }

    #[test]
    fn test_plan_natural_keys_are_unique() {
        let entries = vec![
            entry(10, discipline(1, "MSG", "Масоги", None), "FESTIVAL"),
            entry(11, discipline(2, "HYO", "Пхумсэ", None), "FESTIVAL"),
            entry(12, discipline(3, "PWR", "Силовое разбивание", None), "FESTIVAL"),
        ];
        let ages = vec![
            age(4, "Мужчины", 18, 99, "MALE"),
            age(5, "Женщины", 18, 99, "FEMALE"),
        ];
        let belts = vec![
            belt(50, 2, 7, 10, "10-7 гып"),
            belt(51, 2, 4, 6, "6-4 гып"),
            belt(52, 2, 1, 3, "3-1 гып"),
            belt(53, 2, 101, 103, "1-3 дан"),
        ];

        let plan = plan_categories(&tables(), &entries, &ages, &belts).unwrap();

        // One plan entry per natural key: repeated application can only
        // update, never multiply.
        let mut keys = HashSet::new();
        for e in &plan.entries {
            let partition = match &e.partition {
                PlannedPartition::None => (None, None),
                PlannedPartition::Weight(band) => (Some(band.code_fragment()), None),
                PlannedPartition::Belt { belt_category_id } => (None, Some(*belt_category_id)),
            };
            assert!(
                keys.insert((e.competition_discipline_id, e.age_category_id, e.gender, partition)),
                "duplicate natural key in plan"
            );
        }
    }

    #[test]
    fn test_female_ladder_differs_from_male() {
        let entries = vec![entry(10, discipline(1, "MSG", "Масоги", None), "FESTIVAL")];
        let ages = vec![age(5, "Женщины", 18, 99, "FEMALE")];

        let plan = plan_categories(&tables(), &entries, &ages, &[]).unwrap();

        assert_eq!(plan.entries.len(), 7);
        assert_eq!(
            plan.entries[0].name,
            "Масоги\tЖенщины\t40-45 кг\tЖенщины"
        );
    }

    #[test]
    fn test_invalid_gender_row_is_an_error() {
        let entries = vec![entry(10, discipline(1, "MSG", "Масоги", None), "FESTIVAL")];
        let ages = vec![age(4, "Мужчины", 18, 99, "UNKNOWN")];

        let err = plan_categories(&tables(), &entries, &ages, &[]).unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
    }

    #[test]
    fn test_build_name_drops_empty_segments() {
        assert_eq!(
            build_name("Масоги", "", Some("45-50 кг"), Gender::Male),
            "Масоги\t45-50 кг\tМужчины"
        );
        assert_eq!(
            build_name("Пхумсэ", "Юниорки", None, Gender::Female),
            "Пхумсэ\tЮниорки\tЖенщины"
        );
    }

    #[test]
    fn test_build_code_formats() {
        assert_eq!(build_code("MSG", 4, Some(('W', 12)), Gender::Male), "MSG_AGE4_W12_M");
        assert_eq!(build_code("hyo", 2, Some(('B', 7)), Gender::Female), "HYO_AGE2_B7_F");
        assert_eq!(build_code("PWR", 9, None, Gender::Male), "PWR_AGE9_M");
        // Codes longer than three characters are truncated.
        assert_eq!(build_code("SPTX", 1, None, Gender::Female), "SPT_AGE1_F");
    }
}
