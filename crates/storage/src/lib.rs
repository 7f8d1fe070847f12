pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod regulations;
pub mod repository;
pub mod services;

pub use db::Database;
