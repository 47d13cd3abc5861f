//! Bulk seeding in a single transaction

use sqlx::SqlitePool;

use super::repos::categories::upsert as upsert_category;
use super::repos::questions::insert as insert_question;
use super::repos::DbError;
use crate::models::NewQuestion;

/// What a seed run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub question_ids: Vec<i64>,
}

/// Upsert `categories` and insert `new_questions` atomically.
///
/// Any failure rolls back every row, including the category upserts.
pub async fn seed(
    pool: &SqlitePool,
    categories: &[(i64, &str)],
    new_questions: &[NewQuestion],
) -> Result<SeedReport, DbError> {
    let mut tx = pool.begin().await?;

    for (id, kind) in categories {
        upsert_category(&mut tx, *id, kind).await?;
    }

    let mut question_ids = Vec::with_capacity(new_questions.len());
    for new in new_questions {
        question_ids.push(insert_question(&mut tx, new).await?);
    }

    tx.commit().await?;
    tracing::debug!(
        categories = categories.len(),
        questions = question_ids.len(),
        "Seed committed"
    );

    Ok(SeedReport {
        categories: categories.len(),
        question_ids,
    })
}
