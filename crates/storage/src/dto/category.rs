use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a category generation run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationReport {
    /// Categories inserted by this run
    pub created: u64,
    /// Pre-existing categories whose name/code were refreshed
    pub updated: u64,
    /// Active competition-discipline rows examined
    pub disciplines_processed: u64,
    /// Belt rules that produced nothing because no matching BeltCategory row
    /// exists; a non-zero value means belt reference data is missing
    pub belt_rules_skipped: u64,
    /// Version of the regulation tables the run used
    pub regulation_version: String,
}

/// Outcome of a category wipe
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearCategoriesResponse {
    pub deleted: u64,
}

/// Per-discipline category count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisciplineCategoryCount {
    pub discipline_id: i32,
    pub count: i64,
}

/// Per-gender category count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenderCategoryCount {
    pub gender: String,
    pub count: i64,
}

/// Aggregated category counts for a competition
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryStats {
    pub total: i64,
    pub by_discipline: Vec<DisciplineCategoryCount>,
    pub by_gender: Vec<GenderCategoryCount>,
}
