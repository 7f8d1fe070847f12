pub mod age_group;
pub mod tables;

pub use age_group::AgeGroup;
pub use tables::{BeltRule, RegulationTables, WeightBand};
