//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - One long-lived pool per process, injected into handlers via state
//! - All statements are parameterized
//! - Storage errors are passed up unchanged; no retries

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{open_in_memory_pool, open_pool, PoolOptions};
pub use repos::*;
pub use schema::{ensure_schema, initialize, seed, InitReport};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DbError {
    /// The storage engine's own error text, without our prefix.
    ///
    /// For SQLite errors this is the raw message (e.g. `no such table: users`).
    pub fn storage_message(&self) -> String {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.message().to_owned(),
            Self::Sqlx(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
        }
    }
}
