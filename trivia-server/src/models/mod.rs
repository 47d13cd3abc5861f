//! Request models with validation
//!
//! Client input is parsed leniently and validated before it reaches storage.
//! Invalid input returns ValidationError, not panic.

pub mod deserializers;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod search;
pub mod validation;

pub use pagination::{Paginated, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::NewQuestion;
pub use quiz::{pick_random, QuizError, QuizRequest};
pub use search::SearchTerm;
pub use validation::ValidationError;
