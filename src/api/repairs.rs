//! Repair workflow endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{repair::CreateRepairRequest, Decision, RepairRequest},
};

use super::AuthenticatedUser;

/// Decision payload for a pending repair
#[derive(Deserialize, ToSchema)]
pub struct ProcessRepairRequest {
    pub decision: Decision,
}

/// List all repair requests
#[utoipa::path(
    get,
    path = "/repairs",
    tag = "repairs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of repair requests", body = Vec<RepairRequest>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_repairs(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<Vec<RepairRequest>> {
    Json(state.services.repairs.list())
}

/// Get a repair request by ID
#[utoipa::path(
    get,
    path = "/repairs/{id}",
    tag = "repairs",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Repair request ID")
    ),
    responses(
        (status = 200, description = "Repair request", body = RepairRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_repair(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<RepairRequest>> {
    let request = state.services.repairs.get(&id)?;
    Ok(Json(request))
}

/// File a repair request for faulty equipment
#[utoipa::path(
    post,
    path = "/repairs",
    tag = "repairs",
    security(("bearer_auth" = [])),
    request_body = CreateRepairRequest,
    responses(
        (status = 201, description = "Repair requested", body = RepairRequest),
        (status = 400, description = "No usable fault descriptions"),
        (status = 403, description = "Equipment not held by your branch"),
        (status = 404, description = "Equipment or branch not found")
    )
)]
pub async fn request_repair(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Json(create): Json<CreateRepairRequest>,
) -> AppResult<(StatusCode, Json<RepairRequest>)> {
    let request = state.services.repairs.request(&actor, create)?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Approve or reject a pending repair (admin only; no relocation)
#[utoipa::path(
    post,
    path = "/repairs/{id}/process",
    tag = "repairs",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Repair request ID")
    ),
    request_body = ProcessRepairRequest,
    responses(
        (status = 200, description = "Request decided", body = RepairRequest),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request already finalized")
    )
)]
pub async fn process_repair(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
    Json(body): Json<ProcessRepairRequest>,
) -> AppResult<Json<RepairRequest>> {
    let request = state.services.repairs.process(&actor, &id, body.decision)?;
    Ok(Json(request))
}
