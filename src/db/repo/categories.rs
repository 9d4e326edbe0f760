//! Category operations for the repository.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Repository;
use crate::domain::Category;

fn row_to_category(row: &SqliteRow) -> Category {
    Category {
        id: row.get("id"),
        kind: row.get("type"),
    }
}

impl Repository {
    /// All categories ordered by id. An empty table yields an empty Vec.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(row_to_category).collect())
    }

    /// Look up one category by id.
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_category))
    }

    /// Insert a category and return its id.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including on a duplicate id.
    pub async fn insert_category(&self, category: &Category) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
            .bind(category.id)
            .bind(category.kind.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }
}
