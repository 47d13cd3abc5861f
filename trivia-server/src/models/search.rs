//! Search term validation

use super::ValidationError;

/// Non-empty search term, matched case-insensitively as a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Accept any non-empty term. Whitespace is significant and kept as is.
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::SearchTerm;
    ///
    /// assert!(SearchTerm::new(Some("title")).is_ok());
    /// assert!(SearchTerm::new(Some("")).is_err());
    /// assert!(SearchTerm::new(None).is_err());
    /// ```
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        match s {
            Some(term) if !term.is_empty() => Ok(Self(term.to_owned())),
            _ => Err(ValidationError::Empty { field: "searchTerm" }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test, folding both sides with Unicode
    /// lowercase rules.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}
