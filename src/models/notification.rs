//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Addressing mode for a notification: a single user, or every admin.
/// Broadcasts are stored once and fanned out at read time by role, so no
/// reserved user id is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Recipient {
    User { id: String },
    Admins,
}

/// Workflow tab the notification points the consumer at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationLink {
    Transfer,
    Repairs,
    AdminPanel,
}

/// An alert emitted by a workflow transition. Mutated only to flip `read`
/// when the addressee acts on it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub id: String,
    pub recipient: Recipient,
    pub title: String,
    pub message: String,
    pub link: NotificationLink,
    pub read: bool,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Delivery rule: direct addressee match, or admin-role broadcast
    pub fn visible_to(&self, user: &super::User) -> bool {
        match &self.recipient {
            Recipient::User { id } => *id == user.id,
            Recipient::Admins => user.is_admin(),
        }
    }
}
