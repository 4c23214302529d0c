//! User model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{RequestStatus, Role};

/// A user account. Credentials are compared verbatim (plaintext) and the
/// password never leaves the server in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    /// Branch affiliation. `None` for the central admin, who is not scoped
    /// to any branch.
    pub branch_id: Option<String>,
    pub contact_number: String,
    pub email: Option<String>,
    pub status: RequestStatus,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Self-registration payload. Role, password and branch fall back to
/// defaults when omitted; status is always forced to PENDING.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub branch_id: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
}

/// Admin-created user (bypasses the approval queue unless a status is given)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Role,
    pub branch_id: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub contact_number: String,
    pub status: Option<RequestStatus>,
}

/// Admin user edit; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub role: Option<Role>,
    pub branch_id: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub status: Option<RequestStatus>,
}

/// Password change for the authenticated user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ChangePassword {
    pub old_password: String,
    #[validate(length(min = 1))]
    pub new_password: String,
}
