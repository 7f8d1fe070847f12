use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};
use crate::models::{DisciplineLevel, Gender};
use crate::regulations::AgeGroup;

/// One weight band of a regulation ladder. `max: None` marks the open-ended
/// top band ("min and above").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBand {
    pub min: Decimal,
    #[serde(default)]
    pub max: Option<Decimal>,
}

/// Adjacent bands step by 0.1 kg: each band's min is the previous max + 0.1.
fn band_step() -> Decimal {
    Decimal::new(1, 1)
}

impl WeightBand {
    /// Display name used for the weight-category row and for the weight
    /// segment of generated category names.
    pub fn display_name(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{} кг", self.min, max),
            None => format!("{} кг и выше", self.min),
        }
    }

    /// Fragment used in weight-category codes.
    pub fn code_fragment(&self) -> String {
        match self.max {
            Some(max) => format!("{}_{}", self.min, max),
            None => format!("{}_PLUS", self.min),
        }
    }
}

/// One belt-grade rule. Grade values 1-10 are descending gyp grades,
/// 101-109 ascending dan grades; a rule never mixes the two families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeltRule {
    pub min: i32,
    pub max: i32,
    pub name: String,
}

fn is_valid_grade(grade: i32) -> bool {
    (1..=10).contains(&grade) || (101..=109).contains(&grade)
}

/// The federation's regulation tables: weight ladders keyed by
/// (age group, gender), belt rules keyed by (level, age group), and the
/// minimum-grade table that doubles as the eligibility gate. Loaded once at
/// startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulationTables {
    version: String,
    weight_ranges: BTreeMap<AgeGroup, BTreeMap<Gender, Vec<WeightBand>>>,
    belt_ranges: BTreeMap<DisciplineLevel, BTreeMap<AgeGroup, Vec<BeltRule>>>,
    minimum_grade: BTreeMap<DisciplineLevel, BTreeMap<AgeGroup, i32>>,
}

impl RegulationTables {
    /// Tables compiled into the binary. Deployments can override them with a
    /// data file via [`RegulationTables::from_path`].
    pub fn builtin() -> Result<Self> {
        Self::parse(include_str!("data/regulations.json"))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let tables: RegulationTables = serde_json::from_str(raw)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Ordered weight ladder for (age group, gender), if the tables define
    /// one.
    pub fn weight_bands(&self, group: AgeGroup, gender: Gender) -> Option<&[WeightBand]> {
        self.weight_ranges
            .get(&group)
            .and_then(|by_gender| by_gender.get(&gender))
            .map(Vec::as_slice)
    }

    /// Ordered belt rules for (level, age group), if the tables define any.
    pub fn belt_rules(&self, level: DisciplineLevel, group: AgeGroup) -> Option<&[BeltRule]> {
        self.belt_ranges
            .get(&level)
            .and_then(|by_group| by_group.get(&group))
            .map(Vec::as_slice)
    }

    /// An age group is eligible at a regulation level iff the minimum-grade
    /// table has an entry for it.
    pub fn is_eligible(&self, level: DisciplineLevel, group: AgeGroup) -> bool {
        self.minimum_grade
            .get(&level)
            .is_some_and(|by_group| by_group.contains_key(&group))
    }

    pub fn minimum_grade(&self, level: DisciplineLevel, group: AgeGroup) -> Option<i32> {
        self.minimum_grade
            .get(&level)
            .and_then(|by_group| by_group.get(&group))
            .copied()
    }

    /// Every belt rule defined across a level's age groups, deduplicated by
    /// (min, max) keeping the first name seen. Used when provisioning belt
    /// categories for a discipline.
    pub fn distinct_belt_rules(&self, level: DisciplineLevel) -> Vec<&BeltRule> {
        let mut seen = std::collections::HashSet::new();
        let mut rules = Vec::new();
        if let Some(by_group) = self.belt_ranges.get(&level) {
            for group_rules in by_group.values() {
                for rule in group_rules {
                    if seen.insert((rule.min, rule.max)) {
                        rules.push(rule);
                    }
                }
            }
        }
        rules
    }

    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.version.is_empty() {
            errors.push("Regulation version is required".to_string());
        }

        for group in AgeGroup::ALL {
            for gender in [Gender::Male, Gender::Female] {
                match self.weight_bands(group, gender) {
                    None | Some([]) => {
                        errors.push(format!("Weight ladder missing for {group}/{gender}"));
                    }
                    Some(bands) => {
                        self.validate_ladder(group, gender, bands, &mut errors);
                    }
                }
            }
        }

        for (level, by_group) in &self.belt_ranges {
            for (group, rules) in by_group {
                if rules.is_empty() {
                    errors.push(format!("Empty belt rule list for {level}/{group}"));
                }
                if !self.is_eligible(*level, *group) {
                    errors.push(format!(
                        "Belt rules defined for {level}/{group} but no minimum-grade entry"
                    ));
                }
                for rule in rules {
                    if rule.name.is_empty() {
                        errors.push(format!("Belt rule {}-{} has no name", rule.min, rule.max));
                    }
                    if !is_valid_grade(rule.min) || !is_valid_grade(rule.max) {
                        errors.push(format!(
                            "Belt rule '{}' has grades outside 1-10/101-109: {}-{}",
                            rule.name, rule.min, rule.max
                        ));
                    } else if (rule.min <= 10) != (rule.max <= 10) {
                        errors.push(format!(
                            "Belt rule '{}' mixes gyp and dan grades: {}-{}",
                            rule.name, rule.min, rule.max
                        ));
                    } else if rule.min > rule.max {
                        errors.push(format!(
                            "Belt rule '{}' has min > max: {}-{}",
                            rule.name, rule.min, rule.max
                        ));
                    }
                }
            }
        }

        for (level, by_group) in &self.minimum_grade {
            for (group, grade) in by_group {
                if !is_valid_grade(*grade) {
                    errors.push(format!(
                        "Minimum grade for {level}/{group} outside 1-10/101-109: {grade}"
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StorageError::InvalidRegulation(format!(
                "{} error(s): {}",
                errors.len(),
                errors.join("; ")
            )))
        }
    }

    fn validate_ladder(
        &self,
        group: AgeGroup,
        gender: Gender,
        bands: &[WeightBand],
        errors: &mut Vec<String>,
    ) {
        for (idx, band) in bands.iter().enumerate() {
            let is_last = idx == bands.len() - 1;
            match band.max {
                Some(max) if is_last => {
                    errors.push(format!(
                        "Last weight band for {group}/{gender} must be open-ended, got {}-{max}",
                        band.min
                    ));
                }
                Some(max) if band.min >= max => {
                    errors.push(format!(
                        "Weight band for {group}/{gender} has min >= max: {}-{max}",
                        band.min
                    ));
                }
                None if !is_last => {
                    errors.push(format!(
                        "Open-ended weight band in the middle of the {group}/{gender} ladder"
                    ));
                }
                _ => {}
            }
            if idx > 0 {
                if let Some(prev_max) = bands[idx - 1].max {
                    if band.min != prev_max + band_step() {
                        errors.push(format!(
                            "Weight ladder for {group}/{gender} is not contiguous: band {} starts at {}, expected {}",
                            idx,
                            band.min,
                            prev_max + band_step()
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn band(min: &str, max: Option<&str>) -> WeightBand {
        WeightBand {
            min: Decimal::from_str(min).unwrap(),
            max: max.map(|m| Decimal::from_str(m).unwrap()),
        }
    }

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = RegulationTables::builtin().unwrap();
        assert_eq!(tables.version(), "2026.1");
    }

    #[test]
    fn test_adult_male_ladder_has_seven_bands() {
        let tables = RegulationTables::builtin().unwrap();
        let bands = tables.weight_bands(AgeGroup::Adults, Gender::Male).unwrap();
        assert_eq!(bands.len(), 7);
        assert_eq!(bands[0].min, Decimal::from(45));
        assert!(bands.last().unwrap().max.is_none());
    }

    #[test]
    fn test_ladders_cover_every_group_and_gender() {
        let tables = RegulationTables::builtin().unwrap();
        for group in AgeGroup::ALL {
            for gender in [Gender::Male, Gender::Female] {
                let bands = tables.weight_bands(group, gender).unwrap();
                assert!(!bands.is_empty(), "no ladder for {group}/{gender}");
                for pair in bands.windows(2) {
                    assert_eq!(
                        pair[1].min,
                        pair[0].max.unwrap() + band_step(),
                        "gap in {group}/{gender} ladder"
                    );
                }
            }
        }
    }

    #[test]
    fn test_eligibility_gate() {
        let tables = RegulationTables::builtin().unwrap();
        for group in AgeGroup::ALL {
            assert!(tables.is_eligible(DisciplineLevel::Festival, group));
        }
        assert!(!tables.is_eligible(DisciplineLevel::Official, AgeGroup::Age6to7));
        assert!(!tables.is_eligible(DisciplineLevel::Official, AgeGroup::Age8to9));
        assert!(!tables.is_eligible(DisciplineLevel::World, AgeGroup::Age10to11));
        assert!(tables.is_eligible(DisciplineLevel::World, AgeGroup::Age15to17));
    }

    #[test]
    fn test_official_adults_requires_first_dan() {
        let tables = RegulationTables::builtin().unwrap();
        assert_eq!(
            tables.minimum_grade(DisciplineLevel::Official, AgeGroup::Adults),
            Some(101)
        );
        let rules = tables
            .belt_rules(DisciplineLevel::Official, AgeGroup::Adults)
            .unwrap();
        assert_eq!(rules.len(), 9);
        assert!(rules.iter().all(|r| r.min == r.max && r.min >= 101));
    }

    #[test]
    fn test_distinct_belt_rules_dedups_across_groups() {
        let tables = RegulationTables::builtin().unwrap();
        // "10-7 гып" appears in all six FESTIVAL groups but must show up once.
        let rules = tables.distinct_belt_rules(DisciplineLevel::Festival);
        let tens: Vec<_> = rules.iter().filter(|r| r.min == 7 && r.max == 10).collect();
        assert_eq!(tens.len(), 1);
        assert_eq!(tens[0].name, "10-7 гып");
    }

    #[test]
    fn test_rejects_gap_in_ladder() {
        let mut tables = RegulationTables::builtin().unwrap();
        tables
            .weight_ranges
            .get_mut(&AgeGroup::Adults)
            .unwrap()
            .get_mut(&Gender::Male)
            .unwrap()[1]
            .min = Decimal::from(60);
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("not contiguous"));
    }

    #[test]
    fn test_rejects_open_band_in_the_middle() {
        let mut tables = RegulationTables::builtin().unwrap();
        tables
            .weight_ranges
            .get_mut(&AgeGroup::Age6to7)
            .unwrap()
            .get_mut(&Gender::Female)
            .unwrap()[0]
            .max = None;
        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_rejects_mixed_grade_family() {
        let mut tables = RegulationTables::builtin().unwrap();
        tables
            .belt_ranges
            .get_mut(&DisciplineLevel::Festival)
            .unwrap()
            .get_mut(&AgeGroup::Adults)
            .unwrap()
            .push(BeltRule {
                min: 5,
                max: 103,
                name: "broken".to_string(),
            });
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("mixes gyp and dan"));
    }

    #[test]
    fn test_rejects_belt_rules_without_minimum_grade_entry() {
        let mut tables = RegulationTables::builtin().unwrap();
        tables
            .belt_ranges
            .get_mut(&DisciplineLevel::World)
            .unwrap()
            .insert(
                AgeGroup::Age6to7,
                vec![BeltRule {
                    min: 101,
                    max: 101,
                    name: "1 дан".to_string(),
                }],
            );
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("no minimum-grade entry"));
    }

    #[test]
    fn test_rejects_missing_ladder() {
        let mut tables = RegulationTables::builtin().unwrap();
        tables
            .weight_ranges
            .get_mut(&AgeGroup::Age12to14)
            .unwrap()
            .remove(&Gender::Female);
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("Weight ladder missing"));
    }

    #[test]
    fn test_band_display_name() {
        assert_eq!(band("50.1", Some("57")).display_name(), "50.1-57 кг");
        assert_eq!(band("85.1", None).display_name(), "85.1 кг и выше");
    }

    #[test]
    fn test_band_code_fragment() {
        assert_eq!(band("50.1", Some("57")).code_fragment(), "50.1_57");
        assert_eq!(band("85.1", None).code_fragment(), "85.1_PLUS");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            RegulationTables::parse("{"),
            Err(StorageError::RegulationParse(_))
        ));
    }
}
