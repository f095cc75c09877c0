//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues one parameterized
//! statement per operation. List operations use JOINs (no N+1).

pub mod notifications;
pub mod users;

pub use notifications::{Notification, NotificationRepo};
pub use users::{User, UserRepo};
