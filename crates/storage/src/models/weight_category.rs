use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Weight bracket scoped to a discipline and gender. Created on demand from
/// the regulation weight-range tables; natural key is
/// (discipline_id, min_weight, max_weight, gender).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeightCategory {
    pub weight_category_id: i32,
    pub discipline_id: i32,
    pub code: String,
    pub name: String,
    pub min_weight: Decimal,
    pub max_weight: Decimal,
    pub gender: String,
    pub is_active: bool,
}

impl WeightCategory {
    /// Stored `max_weight` for the open-ended top band ("min and above").
    pub fn open_end_sentinel() -> Decimal {
        Decimal::from(999)
    }
}
