use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;

/// Competitor gender. Stored as `MALE`/`FEMALE` text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }

    /// Russian display label used in generated category names.
    pub fn label_ru(&self) -> &'static str {
        match self {
            Self::Male => "Мужчины",
            Self::Female => "Женщины",
        }
    }

    /// Single-letter suffix used in generated category codes.
    pub fn code_letter(&self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl FromStr for Gender {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            other => Err(StorageError::InvalidData(format!(
                "unknown gender value: '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(Gender::Male.as_str(), "MALE");
        assert!("male".parse::<Gender>().is_err());
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(Gender::Male.label_ru(), "Мужчины");
        assert_eq!(Gender::Female.label_ru(), "Женщины");
        assert_eq!(Gender::Male.code_letter(), 'M');
        assert_eq!(Gender::Female.code_letter(), 'F');
    }
}
