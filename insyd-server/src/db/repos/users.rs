//! User repository
//!
//! Users are created by seed data only; this repo is read-only.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::db::DbError;

/// User record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every user, ordered by name.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{initialize, open_in_memory_pool};

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let pool = open_in_memory_pool().await.unwrap();
        initialize(&pool, true).await.unwrap();

        let names: Vec<String> = UserRepo::new(&pool)
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();

        assert_eq!(
            names,
            ["John Architect", "Lisa Planner", "Mike Builder", "Sarah Designer"]
        );
    }

    #[tokio::test]
    async fn list_without_schema_is_storage_error() {
        let pool = open_in_memory_pool().await.unwrap();

        let err = UserRepo::new(&pool).list().await.unwrap_err();
        assert_eq!(err.storage_message(), "no such table: users");
    }
}
