pub mod age_category;
pub mod belt_category;
pub mod competition;
pub mod competition_category;
pub mod competition_discipline;
pub mod discipline;
