//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by table:
//! - `categories.rs` - Category lookups and inserts
//! - `questions.rs` - Question listing, filtering, inserts and deletes

mod categories;
mod questions;

use sqlx::sqlite::SqlitePool;
use std::collections::HashSet;

/// Predicates for `Repository::filter_questions`.
///
/// Every supplied predicate must match; `None` fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<i64>,
    pub excluding_ids: Option<HashSet<i64>>,
    pub search: Option<String>,
}

impl QuestionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: i64) -> Self {
        self.category = Some(category);
        self
    }

    pub fn excluding<I: IntoIterator<Item = i64>>(mut self, ids: I) -> Self {
        self.excluding_ids = Some(ids.into_iter().collect());
        self
    }

    /// Case-insensitive substring match on the question text.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }
}
