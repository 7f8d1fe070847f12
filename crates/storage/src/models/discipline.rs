use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Discipline {
    pub discipline_id: i32,
    pub code: String,
    pub name: String,
    /// Russian display name; generated category names prefer it over `name`.
    pub name_ru: Option<String>,
    /// Stored category shape (`WEIGHT`/`BELT`/`SIMPLE`). NULL for rows that
    /// arrived without one (legacy imports); those fall back to the name
    /// heuristic until backfilled.
    pub category_shape: Option<String>,
    pub is_active: bool,
}

impl Discipline {
    pub fn display_name(&self) -> &str {
        self.name_ru.as_deref().unwrap_or(&self.name)
    }

    /// Effective category shape: the stored value when present and valid,
    /// otherwise inferred from the display name.
    pub fn shape(&self) -> CategoryShape {
        self.category_shape
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| CategoryShape::infer(self.display_name()))
    }
}

/// How a discipline partitions its competition categories: by weight bands,
/// by belt-grade ranges, or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryShape {
    Weight,
    Belt,
    Simple,
}

/// Discipline names (or their spelling variants) that partition by weight.
const WEIGHT_KEYWORDS: [&str; 4] = ["масоги", "массоги", "спарринг", "поинт"];

/// Discipline names that partition by belt grade (formal patterns).
const BELT_KEYWORDS: [&str; 4] = ["хъёнг", "хьёнг", "формальн", "пхумсэ"];

impl CategoryShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "WEIGHT",
            Self::Belt => "BELT",
            Self::Simple => "SIMPLE",
        }
    }

    /// Classifies a discipline by substring match on its lowercased display
    /// name. Power breaking, special technique and anything unrecognized are
    /// Simple. This is a data-backfill heuristic: rows with a stored
    /// `category_shape` never consult it.
    pub fn infer(display_name: &str) -> Self {
        let name = display_name.to_lowercase();
        if WEIGHT_KEYWORDS.iter().any(|kw| name.contains(kw)) {
            return Self::Weight;
        }
        if BELT_KEYWORDS.iter().any(|kw| name.contains(kw)) {
            return Self::Belt;
        }
        Self::Simple
    }
}

impl FromStr for CategoryShape {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEIGHT" => Ok(Self::Weight),
            "BELT" => Ok(Self::Belt),
            "SIMPLE" => Ok(Self::Simple),
            other => Err(StorageError::InvalidData(format!(
                "unknown category shape: '{other}'"
            ))),
        }
    }
}

impl fmt::Display for CategoryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discipline(name_ru: Option<&str>, shape: Option<&str>) -> Discipline {
        Discipline {
            discipline_id: 1,
            code: "TST".to_string(),
            name: "Test".to_string(),
            name_ru: name_ru.map(String::from),
            category_shape: shape.map(String::from),
            is_active: true,
        }
    }

    #[test]
    fn test_infer_weight_keywords() {
        assert_eq!(CategoryShape::infer("Масоги"), CategoryShape::Weight);
        assert_eq!(CategoryShape::infer("Массоги командные"), CategoryShape::Weight);
        assert_eq!(CategoryShape::infer("Лёгкий спарринг"), CategoryShape::Weight);
        assert_eq!(CategoryShape::infer("Поинт-файтинг"), CategoryShape::Weight);
    }

    #[test]
    fn test_infer_belt_keywords() {
        assert_eq!(CategoryShape::infer("Хъёнг"), CategoryShape::Belt);
        assert_eq!(CategoryShape::infer("Хьёнг личный"), CategoryShape::Belt);
        assert_eq!(CategoryShape::infer("Формальные комплексы"), CategoryShape::Belt);
        assert_eq!(CategoryShape::infer("Пхумсэ"), CategoryShape::Belt);
    }

    #[test]
    fn test_infer_defaults_to_simple() {
        assert_eq!(
            CategoryShape::infer("Силовое разбивание"),
            CategoryShape::Simple
        );
        assert_eq!(
            CategoryShape::infer("Специальная техника"),
            CategoryShape::Simple
        );
        assert_eq!(CategoryShape::infer(""), CategoryShape::Simple);
    }

    #[test]
    fn test_infer_is_case_insensitive() {
        assert_eq!(CategoryShape::infer("МАСОГИ"), CategoryShape::Weight);
        assert_eq!(CategoryShape::infer("ПХУМСЭ"), CategoryShape::Belt);
    }

    #[test]
    fn test_display_name_falls_back_to_base_name() {
        let d = discipline(None, None);
        assert_eq!(d.display_name(), "Test");

        let d = discipline(Some("Масоги"), None);
        assert_eq!(d.display_name(), "Масоги");
    }

    #[test]
    fn test_stored_shape_wins_over_heuristic() {
        let d = discipline(Some("Масоги"), Some("SIMPLE"));
        assert_eq!(d.shape(), CategoryShape::Simple);
    }

    #[test]
    fn test_missing_shape_uses_heuristic() {
        let d = discipline(Some("Масоги"), None);
        assert_eq!(d.shape(), CategoryShape::Weight);
    }
}
