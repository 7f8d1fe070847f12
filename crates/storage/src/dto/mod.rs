pub mod category;
pub mod competition;
pub mod discipline;
