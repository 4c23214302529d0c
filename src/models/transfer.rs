//! Transfer request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::RequestStatus;

/// An inter-branch relocation request. `source_branch_id` is a snapshot of
/// the equipment's branch at creation time and is never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferRequest {
    pub id: String,
    pub equipment_id: String,
    pub source_branch_id: String,
    pub target_branch_id: String,
    pub reason: String,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTransferRequest {
    pub equipment_id: String,
    pub target_branch_id: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub reason: String,
}
