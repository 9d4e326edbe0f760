pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod pagination;

pub use config::{Config, SeedMode};
pub use db::{init_db, QuestionFilter, Repository};
pub use domain::{Category, NewQuestion, Question};
pub use error::AppError;
