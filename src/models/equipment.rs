//! Equipment model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A tracked asset. `branch_id` always reflects the current physical
/// location and is relocated only through an approved transfer request
/// (direct edit exists as a distinct admin correction).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: String,
    pub equipment_type: String,
    pub company_id: String,
    pub make: String,
    pub model: String,
    pub serial_number: String,
    pub power: String,
    pub branch_id: String,
    pub condition: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, max = 100))]
    pub equipment_type: String,
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub power: String,
    pub branch_id: String,
    pub condition: Option<String>,
    pub image_url: Option<String>,
}

/// Equipment edit; only supplied fields change. Setting `branch_id` here is
/// the admin location correction, not a transfer.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub equipment_type: Option<String>,
    pub company_id: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub power: Option<String>,
    pub branch_id: Option<String>,
    pub condition: Option<String>,
    pub image_url: Option<String>,
}
