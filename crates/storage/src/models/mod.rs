pub mod age_category;
pub mod belt_category;
pub mod competition;
pub mod competition_category;
pub mod competition_discipline;
pub mod discipline;
pub mod gender;
pub mod weight_category;

pub use age_category::AgeCategory;
pub use belt_category::BeltCategory;
pub use competition::Competition;
pub use competition_category::CompetitionCategory;
pub use competition_discipline::{
    CompetitionDiscipline, CompetitionDisciplineDetail, DisciplineLevel,
};
pub use discipline::{CategoryShape, Discipline};
pub use gender::Gender;
pub use weight_category::WeightCategory;
