//! Branch model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A branch of the organization. `manager_id` points at the user who
/// approves inbound transfers; the reference may dangle (reported as
/// unassigned) and is not enforced at write time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Branch {
    pub id: String,
    pub name: String,
    /// Short label, e.g. "HQ001"
    pub code: String,
    pub location: String,
    pub manager_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBranch {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub code: String,
    #[serde(default)]
    pub location: String,
    pub manager_id: Option<String>,
}

/// Branch edit; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBranch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub location: Option<String>,
    pub manager_id: Option<String>,
}
