//! Repair request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::RequestStatus;

/// Maximum number of fault descriptions per repair request
pub const MAX_FAULTS: usize = 10;

/// A repair request. `branch_id` records where the fault was reported (the
/// equipment's branch at creation), not where the asset currently sits.
/// Approval closes the request without relocating the equipment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RepairRequest {
    pub id: String,
    pub equipment_id: String,
    pub branch_id: String,
    /// Branch designated to perform the repair
    pub target_branch_id: String,
    pub faults: Vec<String>,
    pub remarks: String,
    pub status: RequestStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRepairRequest {
    pub equipment_id: String,
    pub target_branch_id: String,
    /// Up to 10 fault descriptions; blank slots are dropped, at least one
    /// non-empty entry is required
    pub faults: Vec<String>,
    #[serde(default)]
    pub remarks: String,
}
