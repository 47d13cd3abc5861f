//! Question repository
//!
//! One query per access pattern, all ordered by id:
//! - list: every question
//! - by category: exact category match
//! - search: case-insensitive substring on question text
//! - candidates: optional category, excluding already-asked ids
//!
//! Writes that also return a listing run in a single transaction.

use serde::Serialize;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use crate::models::{NewQuestion, SearchTerm};
use super::DbError;

const SELECT_QUESTIONS: &str =
    "SELECT id, question, answer, category, difficulty FROM questions";

/// Question record from database, serialized as-is in responses
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// Which questions a quiz may draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All questions ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let mut conn = self.pool.acquire().await?;
        list_all(&mut conn).await
    }

    /// Questions with an exact category match.
    pub async fn list_by_category(&self, category: i64) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "{SELECT_QUESTIONS} WHERE category = ? ORDER BY id"
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose text contains the term, ignoring case.
    ///
    /// Filtered here rather than in SQL: SQLite `LOWER` only folds ASCII.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let questions = self.list().await?;

        Ok(questions
            .into_iter()
            .filter(|q| term.matches(&q.question))
            .collect())
    }

    /// Questions a quiz can still ask: in scope and not in `exclude`.
    pub async fn candidates(
        &self,
        scope: QuizScope,
        exclude: &[i64],
    ) -> Result<Vec<Question>, DbError> {
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_QUESTIONS);
        builder.push(" WHERE 1 = 1");

        if let QuizScope::Category(category) = scope {
            builder.push(" AND category = ").push_bind(category);
        }

        if !exclude.is_empty() {
            builder.push(" AND id NOT IN (");
            let mut ids = builder.separated(", ");
            for id in exclude {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");
        }

        builder.push(" ORDER BY id");

        let questions = builder
            .build_query_as::<Question>()
            .fetch_all(self.pool)
            .await?;

        Ok(questions)
    }

    /// Get a single question by id.
    pub async fn get(&self, id: i64) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(&format!("{SELECT_QUESTIONS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })
    }

    /// Insert a question, returning its new id.
    pub async fn insert(&self, new: &NewQuestion) -> Result<i64, DbError> {
        let mut conn = self.pool.acquire().await?;
        insert(&mut conn, new).await
    }

    /// Insert a question and return the listing as it was *before* the insert.
    ///
    /// Snapshot and insert share a transaction, so the snapshot is exactly the
    /// state the new row was added to.
    pub async fn create_with_snapshot(
        &self,
        new: &NewQuestion,
    ) -> Result<(i64, Vec<Question>), DbError> {
        let mut tx = self.pool.begin().await?;

        let before = list_all(&mut tx).await?;
        let id = insert(&mut tx, new).await?;

        tx.commit().await?;
        Ok((id, before))
    }

    /// Delete a question and return the remaining listing.
    ///
    /// Returns `DbError::NotFound` when no row has that id.
    pub async fn delete(&self, id: i64) -> Result<Vec<Question>, DbError> {
        let mut tx = self.pool.begin().await?;

        let rows_affected = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }

        let remaining = list_all(&mut tx).await?;
        tx.commit().await?;

        Ok(remaining)
    }
}

async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Question>, DbError> {
    let questions = sqlx::query_as::<_, Question>(&format!("{SELECT_QUESTIONS} ORDER BY id"))
        .fetch_all(conn)
        .await?;

    Ok(questions)
}

pub(crate) async fn insert(conn: &mut SqliteConnection, new: &NewQuestion) -> Result<i64, DbError> {
    let id = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
    )
    .bind(new.question.as_deref())
    .bind(new.answer.as_deref())
    .bind(new.category)
    .bind(new.difficulty)
    .execute(conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}
