use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::StorageError;
use crate::models::Discipline;

/// Join of a competition to a discipline, carrying the regulation level the
/// discipline is run at. Only active rows participate in generation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionDiscipline {
    pub competition_discipline_id: i32,
    pub competition_id: i32,
    pub discipline_id: i32,
    pub discipline_level: String,
    pub is_active: bool,
}

/// Active competition-discipline row joined with its discipline.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionDisciplineDetail {
    pub competition_discipline_id: i32,
    pub competition_id: i32,
    pub discipline_level: String,
    #[sqlx(flatten)]
    pub discipline: Discipline,
}

/// Regulation level a discipline is contested at. Gates which age groups are
/// eligible and which belt-range table applies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisciplineLevel {
    /// Open, beginner-friendly events.
    Festival,
    /// National-standard, grade-gated events.
    Official,
    /// Elite, dan-only events.
    World,
}

impl DisciplineLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Festival => "FESTIVAL",
            Self::Official => "OFFICIAL",
            Self::World => "WORLD",
        }
    }
}

impl FromStr for DisciplineLevel {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FESTIVAL" => Ok(Self::Festival),
            "OFFICIAL" => Ok(Self::Official),
            "WORLD" => Ok(Self::World),
            other => Err(StorageError::InvalidData(format!(
                "unknown discipline level: '{other}'"
            ))),
        }
    }
}

impl fmt::Display for DisciplineLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        for level in [
            DisciplineLevel::Festival,
            DisciplineLevel::Official,
            DisciplineLevel::World,
        ] {
            assert_eq!(level.as_str().parse::<DisciplineLevel>().unwrap(), level);
        }
        assert!("NATIONAL".parse::<DisciplineLevel>().is_err());
    }
}
