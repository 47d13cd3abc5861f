//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The schema is
//! idempotent (`CREATE TABLE IF NOT EXISTS`) and runs on every pool creation.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = include_str!("schema.sql");

/// Create a SQLite connection pool and apply the schema.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://trivia.db`
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the schema fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://trivia.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5)); // concurrent writers wait instead of SQLITE_BUSY

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("Applying trivia schema");
    sqlx::raw_sql(SCHEMA).execute(&pool).await?;

    Ok(pool)
}
