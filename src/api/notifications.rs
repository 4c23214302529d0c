//! Notification endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::Notification};

use super::AuthenticatedUser;

/// List the caller's notifications, newest first
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Notifications visible to the caller", body = Vec<Notification>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_notifications(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Json<Vec<Notification>> {
    Json(state.services.notifications.list_for(&user))
}

/// Mark a notification as read
#[utoipa::path(
    post,
    path = "/notifications/{id}/read",
    tag = "notifications",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = Notification),
        (status = 403, description = "Notification addressed to someone else"),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn mark_notification_read(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Notification>> {
    let notification = state.services.notifications.mark_read(&user, &id)?;
    Ok(Json(notification))
}
