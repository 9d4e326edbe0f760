//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization, migrations and seed data
//! - SQLite pragma configuration
//! - Repository layer for the `categories` and `questions` tables

pub mod migrations;
pub mod repo;

pub use migrations::{init_db, seed, seed_categories, seed_sample_questions};
pub use repo::{QuestionFilter, Repository};
