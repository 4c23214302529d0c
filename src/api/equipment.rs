//! Equipment management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        equipment::{CreateEquipment, UpdateEquipment},
        Equipment,
    },
};

use super::AuthenticatedUser;

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of equipment", body = Vec<Equipment>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<Vec<Equipment>> {
    Json(state.services.directory.list_equipment())
}

/// Get equipment details by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Equipment>> {
    let item = state.services.directory.get_equipment(&id)?;
    Ok(Json(item))
}

/// Register new equipment (admin only)
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Json(create): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    create.validate()?;
    let created = state.services.directory.create_equipment(&actor, create)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update equipment (admin only). Changing the branch here is the admin
/// location correction, distinct from the transfer workflow.
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Equipment ID")
    ),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
    Json(update): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let updated = state
        .services
        .directory
        .update_equipment(&actor, &id, update)?;
    Ok(Json(updated))
}

/// Delete equipment (admin only)
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Equipment ID")
    ),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.directory.delete_equipment(&actor, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
