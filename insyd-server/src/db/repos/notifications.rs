//! Notification repository
//!
//! Read state only moves one way (unread → read). Updates are guarded by
//! `is_read = FALSE`, so the affected-row count is the number of
//! notifications that actually changed.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::db::DbError;
use crate::models::{NewNotification, Window};

/// Notification joined with the acting user's name
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub from_user_id: Option<i64>,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub from_user_name: Option<String>,
}

/// Notification repository
pub struct NotificationRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> NotificationRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List a user's notifications, newest first.
    ///
    /// Timestamps have second granularity, so id breaks ties.
    pub async fn list_for_user(
        &self,
        user_id: i64,
        window: Window,
    ) -> Result<Vec<Notification>, DbError> {
        let rows = sqlx::query_as::<_, Notification>(
            r#"
            SELECT
                n.id,
                n.user_id,
                n.type,
                n.title,
                n.message,
                n.from_user_id,
                n.is_read,
                n.created_at,
                u.name AS from_user_name
            FROM notifications n
            LEFT JOIN users u ON n.from_user_id = u.id
            WHERE n.user_id = ?
            ORDER BY n.created_at DESC, n.id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Count a user's unread notifications.
    pub async fn unread_count(&self, user_id: i64) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE user_id = ? AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Mark one notification read. Returns rows changed (0 if missing or already read).
    pub async fn mark_read(&self, id: i64) -> Result<u64, DbError> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = ? AND is_read = FALSE")
                .bind(id)
                .execute(self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    /// Mark every unread notification of a user read. Returns rows changed.
    pub async fn mark_all_read(&self, user_id: i64) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = ? AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Insert a notification (unread). Returns the new id.
    pub async fn create(&self, new: &NewNotification) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO notifications (user_id, type, title, message, from_user_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.user_id)
        .bind(&new.kind)
        .bind(&new.title)
        .bind(&new.message)
        .bind(new.from_user_id)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{initialize, open_in_memory_pool};

    async fn seeded() -> SqlitePool {
        let pool = open_in_memory_pool().await.unwrap();
        initialize(&pool, true).await.unwrap();
        pool
    }

    fn note(user_id: i64, title: &str) -> NewNotification {
        NewNotification::new(user_id, "comment", title, "body", None).unwrap()
    }

    #[tokio::test]
    async fn list_joins_actor_name() {
        let pool = seeded().await;
        let rows = NotificationRepo::new(&pool)
            .list_for_user(1, Window::default())
            .await
            .unwrap();

        let follow = rows.iter().find(|n| n.kind == "follow").unwrap();
        assert_eq!(follow.from_user_id, Some(2));
        assert_eq!(follow.from_user_name.as_deref(), Some("Sarah Designer"));
        assert!(!follow.is_read);
    }

    #[tokio::test]
    async fn list_breaks_timestamp_ties_by_id() {
        let pool = seeded().await;
        let repo = NotificationRepo::new(&pool);
        let a = repo.create(&note(4, "first")).await.unwrap();
        let b = repo.create(&note(4, "second")).await.unwrap();
        sqlx::query("UPDATE notifications SET created_at = '2024-01-01 00:00:00' WHERE user_id = 4")
            .execute(&pool)
            .await
            .unwrap();

        let ids: Vec<i64> = repo
            .list_for_user(4, Window::default())
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[tokio::test]
    async fn list_respects_window() {
        let pool = seeded().await;
        let repo = NotificationRepo::new(&pool);
        for i in 0..5 {
            repo.create(&note(4, &format!("n{i}"))).await.unwrap();
        }

        let page = repo.list_for_user(4, Window::new(2, 1)).await.unwrap();
        let titles: Vec<_> = page.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["n3", "n2"]);
    }

    #[tokio::test]
    async fn mark_read_reports_only_real_changes() {
        let pool = seeded().await;
        let repo = NotificationRepo::new(&pool);

        assert_eq!(repo.mark_read(1).await.unwrap(), 1);
        assert_eq!(repo.mark_read(1).await.unwrap(), 0);
        assert_eq!(repo.mark_read(9999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn mark_all_read_is_scoped_to_user() {
        let pool = seeded().await;
        let repo = NotificationRepo::new(&pool);

        assert_eq!(repo.mark_all_read(1).await.unwrap(), 2);
        assert_eq!(repo.unread_count(1).await.unwrap(), 0);
        assert_eq!(repo.unread_count(2).await.unwrap(), 2);
        assert_eq!(repo.unread_count(3).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn create_accepts_unknown_user() {
        let pool = seeded().await;
        let id = NotificationRepo::new(&pool)
            .create(&note(42, "orphan"))
            .await
            .unwrap();
        assert!(id > 6);
    }
}
