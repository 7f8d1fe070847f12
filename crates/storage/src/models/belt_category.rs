use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Belt-grade bracket scoped to a discipline. Grade values follow the
/// regulation convention: 1-10 are descending gyp grades, 101-109 ascending
/// dan grades. The generator only looks these up; provisioning creates them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BeltCategory {
    pub belt_category_id: i32,
    pub discipline_id: i32,
    pub belt_min: i32,
    pub belt_max: i32,
    pub name: String,
}
