//! insyd-server: notification service over SQLite
//!
//! Stores users and their notifications and exposes them over a small
//! JSON HTTP API: listing, unread counts, read-state updates and creation.

pub mod db;
pub mod http;
pub mod models;

pub use db::{open_in_memory_pool, open_pool, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
