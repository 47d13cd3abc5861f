//! Repository implementations for database access
//!
//! Each repository borrows the pool and exposes one query function per
//! access pattern. Multi-step operations run inside a transaction.

pub mod categories;
pub mod questions;

use sqlx::error::ErrorKind;

pub use categories::{Category, CategoryMap, CategoryRepo};
pub use questions::{Question, QuestionRepo, QuizScope};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A storage-level constraint rejected the write (e.g. NOT NULL).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            match db_err.kind() {
                ErrorKind::NotNullViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation => {
                    return Self::ConstraintViolation(db_err.message().to_owned());
                }
                _ => {}
            }
        }
        Self::Sqlx(e)
    }
}
