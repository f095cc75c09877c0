//! SQLite connection pool management
//!
//! The store is a single file. The pool defaults to one connection so every
//! handler shares the same long-lived handle.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use super::DbError;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// How long a statement waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool tuning knobs
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    pub max_connections: u32,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Open (creating if missing) the SQLite store at `path`.
///
/// The parent directory is created when absent. Foreign keys stay
/// unenforced: notifications may reference users that do not exist.
///
/// # Example
///
/// ```ignore
/// let pool = open_pool("insyd.db", PoolOptions::default()).await?;
/// ```
pub async fn open_pool(path: impl AsRef<Path>, options: PoolOptions) -> Result<SqlitePool, DbError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let connect = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(options.max_connections.max(1))
        .connect_with(connect)
        .await?;

    Ok(pool)
}

/// Open a private in-memory store (for testing).
///
/// Pinned to one connection that never expires; an in-memory SQLite
/// database lives exactly as long as its connection.
pub async fn open_in_memory_pool() -> Result<SqlitePool, DbError> {
    let connect = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect)
        .await?;

    Ok(pool)
}
