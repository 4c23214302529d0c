//! Branch management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        branch::{CreateBranch, UpdateBranch},
        Branch,
    },
};

use super::AuthenticatedUser;

/// List all branches
#[utoipa::path(
    get,
    path = "/branches",
    tag = "branches",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of branches", body = Vec<Branch>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_branches(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<Vec<Branch>> {
    Json(state.services.directory.list_branches())
}

/// Get branch details by ID
#[utoipa::path(
    get,
    path = "/branches/{id}",
    tag = "branches",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Branch ID")
    ),
    responses(
        (status = 200, description = "Branch details", body = Branch),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn get_branch(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Branch>> {
    let branch = state.services.directory.get_branch(&id)?;
    Ok(Json(branch))
}

/// Create a branch (admin only)
#[utoipa::path(
    post,
    path = "/branches",
    tag = "branches",
    security(("bearer_auth" = [])),
    request_body = CreateBranch,
    responses(
        (status = 201, description = "Branch created", body = Branch),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_branch(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Json(create): Json<CreateBranch>,
) -> AppResult<(StatusCode, Json<Branch>)> {
    create.validate()?;
    let created = state.services.directory.create_branch(&actor, create)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a branch (admin only)
#[utoipa::path(
    put,
    path = "/branches/{id}",
    tag = "branches",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Branch ID")
    ),
    request_body = UpdateBranch,
    responses(
        (status = 200, description = "Branch updated", body = Branch),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn update_branch(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
    Json(update): Json<UpdateBranch>,
) -> AppResult<Json<Branch>> {
    let updated = state.services.directory.update_branch(&actor, &id, update)?;
    Ok(Json(updated))
}

/// Delete a branch (admin only)
#[utoipa::path(
    delete,
    path = "/branches/{id}",
    tag = "branches",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Branch ID")
    ),
    responses(
        (status = 204, description = "Branch deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn delete_branch(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.directory.delete_branch(&actor, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
