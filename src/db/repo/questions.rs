//! Question operations for the repository.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use super::{QuestionFilter, Repository};
use crate::domain::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

fn row_to_question(row: &SqliteRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

impl Repository {
    /// All questions ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(row_to_question).collect())
    }

    /// Look up one question by id.
    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_question))
    }

    /// Total number of stored questions.
    pub async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<i64, _>("total"))
    }

    /// Questions matching every predicate in `filter`, ordered by id.
    ///
    /// The search term is a literal, case-insensitive substring of the
    /// question text. SQLite's `lower()` only folds ASCII, so the search
    /// and the id exclusion are applied after the fetch; the exclusion
    /// list is then also not bounded by SQLite's parameter limit.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn filter_questions(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let where_clause = if filter.category.is_some() {
            "WHERE category = ?"
        } else {
            ""
        };
        let sql = format!(
            "SELECT {} FROM questions {} ORDER BY id",
            QUESTION_COLUMNS, where_clause
        );

        let mut query = sqlx::query(&sql);
        if let Some(category) = filter.category {
            query = query.bind(category);
        }

        let rows = query.fetch_all(&self.pool).await?;
        let mut questions: Vec<Question> = rows.iter().map(row_to_question).collect();

        if let Some(excluded) = &filter.excluding_ids {
            questions.retain(|q| !excluded.contains(&q.id));
        }
        if let Some(term) = filter.search.as_deref() {
            let needle = term.to_lowercase();
            questions.retain(|q| q.question.to_lowercase().contains(&needle));
        }

        debug!(matched = questions.len(), ?filter, "filtered questions");
        Ok(questions)
    }

    /// Persist a new question and return its generated id.
    ///
    /// # Errors
    /// Returns an error if the write cannot commit.
    pub async fn insert_question(&self, question: &NewQuestion) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(question.question.as_str())
        .bind(question.answer.as_str())
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Delete a question by id.
    ///
    /// Returns `false` when no row had that id.
    pub async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::repo::test_support::temp_repo;
    use crate::db::repo::QuestionFilter;
    use crate::db::Repository;
    use crate::domain::NewQuestion;

    async fn insert(repo: &Repository, question: &str, category: i64) -> i64 {
        repo.insert_question(&NewQuestion::new(question, "answer", category, 1))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let (repo, _temp) = temp_repo().await;
        let id = repo
            .insert_question(&NewQuestion::new("Who discovered penicillin?", "Alexander Fleming", 1, 3))
            .await
            .unwrap();

        let stored = repo.get_question(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.question, "Who discovered penicillin?");
        assert_eq!(stored.answer, "Alexander Fleming");
        assert_eq!(stored.category, 1);
        assert_eq!(stored.difficulty, 3);
        assert!(repo.get_question(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_delete_round_trip() {
        let (repo, _temp) = temp_repo().await;
        insert(&repo, "first", 1).await;
        let before = repo.count_questions().await.unwrap();

        let id = insert(&repo, "second", 1).await;
        assert_eq!(repo.count_questions().await.unwrap(), before + 1);

        assert!(repo.delete_question(id).await.unwrap());
        assert_eq!(repo.count_questions().await.unwrap(), before);
        assert!(repo
            .list_questions()
            .await
            .unwrap()
            .iter()
            .all(|q| q.id != id));
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let (repo, _temp) = temp_repo().await;
        assert!(!repo.delete_question(404).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_questions_ordered_by_id() {
        let (repo, _temp) = temp_repo().await;
        let a = insert(&repo, "a", 2).await;
        let b = insert(&repo, "b", 1).await;
        let ids: Vec<i64> = repo
            .list_questions()
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn test_filter_by_category_and_exclusion() {
        let (repo, _temp) = temp_repo().await;
        let a = insert(&repo, "a", 4).await;
        let b = insert(&repo, "b", 4).await;
        insert(&repo, "c", 5).await;

        let in_category = repo
            .filter_questions(&QuestionFilter::new().category(4))
            .await
            .unwrap();
        assert_eq!(in_category.len(), 2);

        let remaining = repo
            .filter_questions(&QuestionFilter::new().category(4).excluding([a]))
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);

        let none_left = repo
            .filter_questions(&QuestionFilter::new().category(4).excluding([a, b]))
            .await
            .unwrap();
        assert!(none_left.is_empty());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let (repo, _temp) = temp_repo().await;
        let id = insert(
            &repo,
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
            5,
        )
        .await;
        insert(&repo, "What is the largest lake in Africa?", 3).await;

        let found = repo
            .filter_questions(&QuestionFilter::new().search("tom hanks"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let (repo, _temp) = temp_repo().await;
        let id = insert(&repo, "Où est l'ÉCOLE?", 3).await;
        insert(&repo, "Where is the school?", 3).await;

        let found = repo
            .filter_questions(&QuestionFilter::new().search("école"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let (repo, _temp) = temp_repo().await;
        insert(&repo, "What is 50% of 10?", 1).await;
        insert(&repo, "Plain question", 1).await;

        let found = repo
            .filter_questions(&QuestionFilter::new().search("%"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let found = repo
            .filter_questions(&QuestionFilter::new().search("_"))
            .await
            .unwrap();
        assert!(found.is_empty());
    }
}
