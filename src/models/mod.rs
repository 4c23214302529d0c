//! Data models for EquipMaster

pub mod branch;
pub mod enums;
pub mod equipment;
pub mod notification;
pub mod repair;
pub mod transfer;
pub mod user;

// Re-export commonly used types
pub use branch::Branch;
pub use enums::{Decision, RequestStatus, Role};
pub use equipment::Equipment;
pub use notification::{Notification, NotificationLink, Recipient};
pub use repair::RepairRequest;
pub use transfer::TransferRequest;
pub use user::User;
