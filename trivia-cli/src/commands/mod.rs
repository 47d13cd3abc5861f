//! Command implementations for the trivia CLI

pub mod seed;
pub mod serve;

pub use seed::run_seed;
pub use serve::run_serve;

/// Default database location, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://trivia.db";
