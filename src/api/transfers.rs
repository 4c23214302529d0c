//! Transfer workflow endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{transfer::CreateTransferRequest, Decision, TransferRequest},
};

use super::AuthenticatedUser;

/// Decision payload for a pending transfer
#[derive(Deserialize, ToSchema)]
pub struct ProcessTransferRequest {
    pub decision: Decision,
    /// Stored as the rejection reason when the decision is REJECTED
    pub reason: Option<String>,
}

/// List all transfer requests
#[utoipa::path(
    get,
    path = "/transfers",
    tag = "transfers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of transfer requests", body = Vec<TransferRequest>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_transfers(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<Vec<TransferRequest>> {
    Json(state.services.transfers.list())
}

/// Get a transfer request by ID
#[utoipa::path(
    get,
    path = "/transfers/{id}",
    tag = "transfers",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Transfer request ID")
    ),
    responses(
        (status = 200, description = "Transfer request", body = TransferRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_transfer(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<TransferRequest>> {
    let request = state.services.transfers.get(&id)?;
    Ok(Json(request))
}

/// File an equipment relocation request
#[utoipa::path(
    post,
    path = "/transfers",
    tag = "transfers",
    security(("bearer_auth" = [])),
    request_body = CreateTransferRequest,
    responses(
        (status = 201, description = "Transfer requested", body = TransferRequest),
        (status = 400, description = "Target equals current branch"),
        (status = 403, description = "Equipment not held by your branch"),
        (status = 404, description = "Equipment or branch not found")
    )
)]
pub async fn request_transfer(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Json(create): Json<CreateTransferRequest>,
) -> AppResult<(StatusCode, Json<TransferRequest>)> {
    create.validate()?;
    let request = state.services.transfers.request(&actor, create)?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Approve or reject a pending transfer. Approval relocates the equipment
/// to the target branch.
#[utoipa::path(
    post,
    path = "/transfers/{id}/process",
    tag = "transfers",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Transfer request ID")
    ),
    request_body = ProcessTransferRequest,
    responses(
        (status = 200, description = "Request decided", body = TransferRequest),
        (status = 403, description = "Not the target branch's manager"),
        (status = 404, description = "Request not found"),
        (status = 409, description = "Request already finalized")
    )
)]
pub async fn process_transfer(
    State(state): State<crate::AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
    Json(body): Json<ProcessTransferRequest>,
) -> AppResult<Json<TransferRequest>> {
    let request = state
        .services
        .transfers
        .process(&actor, &id, body.decision, body.reason)?;
    Ok(Json(request))
}
