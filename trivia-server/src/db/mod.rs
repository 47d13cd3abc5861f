//! Database layer - connection pool and repositories
//!
//! - SQLite through a small sqlx pool, schema applied on connect
//! - One repository per table, one query function per access pattern
//! - Transactions for multi-step operations (delete + relist, snapshot + insert, seed)

pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::create_pool;
pub use repos::*;
pub use seed::{seed, SeedReport};
