//! Database connection pool management
//!
//! The catalog lives in a single SQLite file. The pool is created once at
//! startup and shared by every request; handlers never open the file
//! themselves.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Default maximum connections for the pool.
/// Kept low: SQLite serializes writers anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = include_str!("schema.sql");

/// Open (or create) the catalog database file and apply the schema.
///
/// # Errors
///
/// Returns an error if the parent directory can't be created, the file
/// can't be opened, or the schema fails to apply.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("./database.db").await?;
/// ```
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the catalog database with a custom connection limit.
pub async fn create_pool_with_options(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    apply_schema(&pool).await?;
    tracing::debug!(path = %path.display(), "catalog schema applied");

    Ok(pool)
}

/// Open a private in-memory catalog (for tests).
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// pinned to one connection that is never recycled.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    apply_schema(&pool).await?;
    Ok(pool)
}

/// Create any missing catalog tables.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
