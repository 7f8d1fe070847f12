use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical age-group bucket used to key the regulation tables. Every
/// stored age category is classified into one of these six buckets before
/// any rule lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum AgeGroup {
    #[serde(rename = "6-7")]
    Age6to7,
    #[serde(rename = "8-9")]
    Age8to9,
    #[serde(rename = "10-11")]
    Age10to11,
    #[serde(rename = "12-14")]
    Age12to14,
    #[serde(rename = "15-17")]
    Age15to17,
    #[serde(rename = "18+")]
    Adults,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Age6to7,
        AgeGroup::Age8to9,
        AgeGroup::Age10to11,
        AgeGroup::Age12to14,
        AgeGroup::Age15to17,
        AgeGroup::Adults,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age6to7 => "6-7",
            Self::Age8to9 => "8-9",
            Self::Age10to11 => "10-11",
            Self::Age12to14 => "12-14",
            Self::Age15to17 => "15-17",
            Self::Adults => "18+",
        }
    }

    /// Buckets an age range. Rules are checked in order, first match wins.
    /// Returns `None` for ranges that fit no bucket (e.g. spanning two
    /// buckets); the caller decides whether that is an error or falls back
    /// to [`AgeGroup::Adults`].
    pub fn from_range(min_age: i32, max_age: i32) -> Option<AgeGroup> {
        if min_age >= 6 && max_age <= 7 {
            Some(Self::Age6to7)
        } else if min_age >= 8 && max_age <= 9 {
            Some(Self::Age8to9)
        } else if min_age >= 10 && max_age <= 11 {
            Some(Self::Age10to11)
        } else if min_age >= 12 && max_age <= 14 {
            Some(Self::Age12to14)
        } else if min_age >= 15 && max_age <= 17 {
            Some(Self::Age15to17)
        } else if min_age >= 18 {
            Some(Self::Adults)
        } else {
            None
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_exact_ranges() {
        assert_eq!(AgeGroup::from_range(6, 7), Some(AgeGroup::Age6to7));
        assert_eq!(AgeGroup::from_range(8, 9), Some(AgeGroup::Age8to9));
        assert_eq!(AgeGroup::from_range(10, 11), Some(AgeGroup::Age10to11));
        assert_eq!(AgeGroup::from_range(12, 14), Some(AgeGroup::Age12to14));
        assert_eq!(AgeGroup::from_range(15, 17), Some(AgeGroup::Age15to17));
        assert_eq!(AgeGroup::from_range(18, 99), Some(AgeGroup::Adults));
    }

    #[test]
    fn test_buckets_sub_ranges() {
        // Single-year rows collapse onto the same bucket.
        assert_eq!(AgeGroup::from_range(10, 10), Some(AgeGroup::Age10to11));
        assert_eq!(AgeGroup::from_range(11, 11), Some(AgeGroup::Age10to11));
        assert_eq!(AgeGroup::from_range(12, 13), Some(AgeGroup::Age12to14));
    }

    #[test]
    fn test_adults_ignores_max_age() {
        assert_eq!(AgeGroup::from_range(18, 35), Some(AgeGroup::Adults));
        assert_eq!(AgeGroup::from_range(40, 45), Some(AgeGroup::Adults));
    }

    #[test]
    fn test_range_spanning_buckets_is_unclassified() {
        assert_eq!(AgeGroup::from_range(5, 20), None);
        assert_eq!(AgeGroup::from_range(10, 14), None);
        assert_eq!(AgeGroup::from_range(0, 5), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&AgeGroup::Adults).unwrap(), "\"18+\"");
        assert_eq!(
            serde_json::from_str::<AgeGroup>("\"12-14\"").unwrap(),
            AgeGroup::Age12to14
        );
    }
}
