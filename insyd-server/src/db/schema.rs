//! Schema bootstrap and seed data
//!
//! Both steps are idempotent and run on every start, before the listener
//! is bound.

use sqlx::SqlitePool;

use super::DbError;

/// Sample users: (name, email). Email is unique, so re-inserting is a no-op.
const SEED_USERS: [(&str, &str); 4] = [
    ("John Architect", "john@example.com"),
    ("Sarah Designer", "sarah@example.com"),
    ("Mike Builder", "mike@example.com"),
    ("Lisa Planner", "lisa@example.com"),
];

/// Sample notifications: (id, user_id, type, title, message, from_user_id).
///
/// Ids are fixed so `INSERT OR IGNORE` has a key to conflict on.
const SEED_NOTIFICATIONS: [(i64, i64, &str, &str, &str, Option<i64>); 6] = [
    (1, 1, "follow", "New Follower", "Sarah Designer started following you", Some(2)),
    (
        2,
        1,
        "like",
        "Post Liked",
        "Mike Builder liked your blog post \"Modern Architecture Trends\"",
        Some(3),
    ),
    (3, 2, "comment", "New Comment", "John Architect commented on your design portfolio", Some(1)),
    (4, 2, "job", "Job Opportunity", "New architect position at Green Buildings Corp", None),
    (5, 3, "follow", "New Follower", "Lisa Planner started following you", Some(4)),
    (6, 3, "like", "Post Liked", "John Architect liked your construction update", Some(1)),
];

/// Outcome of [`initialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// Whether seed rows were applied (or already present)
    pub seeded: bool,
}

/// Create `users` and `notifications` if they do not exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            type TEXT NOT NULL,
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            from_user_id INTEGER,
            is_read BOOLEAN DEFAULT FALSE,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (user_id) REFERENCES users (id),
            FOREIGN KEY (from_user_id) REFERENCES users (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_notifications_user_created ON notifications (user_id, created_at)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert the fixed sample rows, skipping any that already exist.
pub async fn seed(pool: &SqlitePool) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;

    for (name, email) in SEED_USERS {
        sqlx::query("INSERT OR IGNORE INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&mut *tx)
            .await?;
    }

    for (id, user_id, kind, title, message, from_user_id) in SEED_NOTIFICATIONS {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO notifications (id, user_id, type, title, message, from_user_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(kind)
        .bind(title)
        .bind(message)
        .bind(from_user_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Bootstrap the store: schema, then (optionally) seed data.
///
/// A schema failure is returned to the caller; the server cannot run
/// without tables. A seed failure is logged and startup continues.
pub async fn initialize(pool: &SqlitePool, with_seed: bool) -> Result<InitReport, DbError> {
    ensure_schema(pool).await?;
    tracing::info!("Database schema ready");

    if !with_seed {
        tracing::info!("Seeding skipped");
        return Ok(InitReport { seeded: false });
    }

    match seed(pool).await {
        Ok(()) => {
            tracing::info!("Seed data applied");
            Ok(InitReport { seeded: true })
        }
        Err(e) => {
            tracing::error!(error = %e, "Seeding failed, continuing with existing data");
            Ok(InitReport { seeded: false })
        }
    }
}
