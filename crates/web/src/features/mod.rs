pub mod age_categories;
pub mod categories;
pub mod competitions;
pub mod disciplines;
