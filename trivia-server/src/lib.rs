//! trivia-server: HTTP API for a trivia question bank
//!
//! Serves categories and questions from SQLite, with paginated listings,
//! case-insensitive search, and a random quiz that never repeats a
//! question the client has already seen.

pub mod db;
pub mod http;
pub mod models;

pub use db::create_pool;
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
