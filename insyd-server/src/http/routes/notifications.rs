//! Notification endpoints
//!
//! No ownership checks: any caller may read or mutate any user's
//! notifications by id.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Notification, NotificationRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::http::server::AppState;
use crate::models::{NewNotification, ValidationError, Window, WindowParams};

/// Create notification request. Fields are optional here so that missing
/// ones are reported together as a validation error.
#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub from_user_id: Option<i64>,
}

impl TryFrom<CreateNotificationRequest> for NewNotification {
    type Error = ValidationError;

    fn try_from(req: CreateNotificationRequest) -> Result<Self, Self::Error> {
        NewNotification::from_parts(req.user_id, req.kind, req.title, req.message, req.from_user_id)
    }
}

/// Create notification response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
}

/// Unread count response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

/// Read-state update response
#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub message: &'static str,
    pub changes: u64,
}

/// GET /api/notifications/{user_id} - newest first, with actor names
async fn list_notifications(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<WindowParams>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let window = Window::from(params);
    let rows = NotificationRepo::new(&state.pool)
        .list_for_user(user_id, window)
        .await?;
    Ok(Json(rows))
}

/// GET /api/notifications/{user_id}/unread-count
async fn unread_count(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let unread_count = NotificationRepo::new(&state.pool)
        .unread_count(user_id)
        .await?;
    Ok(Json(UnreadCountResponse { unread_count }))
}

/// PUT /api/notifications/{id}/read - zero changes for unknown ids
async fn mark_read(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let changes = NotificationRepo::new(&state.pool).mark_read(id).await?;
    tracing::debug!(id, changes, "marked notification read");

    Ok(Json(ChangesResponse {
        message: "Notification marked as read",
        changes,
    }))
}

/// PUT /api/notifications/user/{user_id}/read-all
async fn mark_all_read(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let changes = NotificationRepo::new(&state.pool)
        .mark_all_read(user_id)
        .await?;
    tracing::debug!(user_id, changes, "marked all notifications read");

    Ok(Json(ChangesResponse {
        message: "All notifications marked as read",
        changes,
    }))
}

/// POST /api/notifications - create an unread notification
async fn create_notification(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateNotificationRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new = NewNotification::try_from(req)?;

    let id = NotificationRepo::new(&state.pool).create(&new).await?;
    tracing::info!(id, user_id = new.user_id, kind = %new.kind, "notification created");

    Ok(Json(CreatedResponse {
        id,
        message: "Notification created successfully",
    }))
}

/// Notification routes
///
/// The segment after `/api/notifications/` is `{id}` in every route: the
/// router rejects differently named parameters at the same position.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/notifications", post(create_notification))
        .route("/api/notifications/{id}", get(list_notifications))
        .route("/api/notifications/{id}/unread-count", get(unread_count))
        .route("/api/notifications/{id}/read", put(mark_read))
        .route("/api/notifications/user/{id}/read-all", put(mark_all_read))
}
