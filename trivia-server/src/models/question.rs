//! New question payload

use serde::Deserialize;

use super::deserializers::deserialize_optional_loose_int;
use super::ValidationError;

/// Body of `POST /questions`, also the record shape for seed imports.
///
/// Every field may be missing. Empty `question`/`answer` strings are rejected
/// up front; missing ones are left for the storage NOT NULL constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_loose_int")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_loose_int")]
    pub category: Option<i64>,
}

impl NewQuestion {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question.as_deref() == Some("") {
            return Err(ValidationError::Empty { field: "question" });
        }
        if self.answer.as_deref() == Some("") {
            return Err(ValidationError::Empty { field: "answer" });
        }
        Ok(())
    }
}
