//! Database connection pool management
//!
//! Uses a sqlx SqlitePool over a single local database file. The file is
//! created when missing and the schema is ensured before the pool is
//! handed out.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::schema;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Open (creating if needed) the SQLite database at `path`.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the
/// connection fails, or the schema cannot be applied.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("todos.db").await?;
/// ```
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the SQLite database at `path` with custom options.
///
/// # Arguments
///
/// * `path` - Path to the database file
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    tracing::info!(path = %path.display(), max_connections, "database opened");

    schema::init(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory database.
///
/// Every SQLite `:memory:` connection is its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn open_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;

    schema::init(&pool).await?;
    Ok(pool)
}
