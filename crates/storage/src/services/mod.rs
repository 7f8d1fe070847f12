pub mod category_generation;
pub mod provisioning;
