//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        user::{CreateUser, UpdateUser},
        User,
    },
};

use super::AuthenticatedUser;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<Vec<User>> {
    Json(state.services.directory.list_users())
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.services.directory.get_user(&id)?;
    Ok(Json(user))
}

/// Create a new user (admin only)
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Json(create): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    create.validate()?;
    let created = state.services.directory.create_user(&actor, create)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing user (admin only)
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
    Json(update): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let updated = state.services.directory.update_user(&actor, &id, update)?;
    Ok(Json(updated))
}

/// Delete a user (admin only; the system admin and the acting account are
/// protected)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Protected account")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.directory.delete_user(&actor, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Approve a pending registration (admin only)
#[utoipa::path(
    post,
    path = "/users/{id}/approve",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User approved", body = User),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn approve_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.services.auth.approve(&actor, &id)?;
    Ok(Json(user))
}

/// Reject a pending registration (admin only)
#[utoipa::path(
    post,
    path = "/users/{id}/reject",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User rejected", body = User),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "User not found")
    )
)]
pub async fn reject_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.services.auth.reject(&actor, &id)?;
    Ok(Json(user))
}
