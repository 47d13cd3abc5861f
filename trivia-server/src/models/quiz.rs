//! Quiz request parsing and random selection

use rand::Rng;
use serde::Deserialize;

use super::deserializers::LooseInt;
use super::ValidationError;
use crate::db::{DbError, QuizScope};

/// Category id meaning "every category"
pub const ALL_CATEGORIES: i64 = 0;

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

/// `quiz_category` object; clients also send a display `type` we ignore.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: LooseInt,
}

impl QuizRequest {
    /// Resolve the candidate scope. A missing category is invalid input.
    pub fn scope(&self) -> Result<QuizScope, ValidationError> {
        let category = self.quiz_category.as_ref().ok_or(ValidationError::InvalidFormat {
            field: "quiz_category",
            reason: "missing category",
        })?;

        Ok(match category.id.0 {
            ALL_CATEGORIES => QuizScope::All,
            id => QuizScope::Category(id),
        })
    }

    /// Ids already shown; absent means none.
    pub fn previous(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}

/// Why a quiz question could not be served
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("invalid quiz request: {0}")]
    InvalidInput(String),

    #[error("no questions left in {scope:?}")]
    EmptyCandidatePool { scope: QuizScope },

    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<ValidationError> for QuizError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

/// Pick one candidate uniformly at random.
pub fn pick_random<T, R>(mut candidates: Vec<T>, rng: &mut R) -> Option<T>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
