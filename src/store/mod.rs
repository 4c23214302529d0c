//! In-memory directory store
//!
//! All entities live in one shared snapshot behind a single lock. Every
//! workflow operation takes the write guard once and performs its whole
//! read-check-write (including notification emission) under it, which gives
//! the serializable semantics the workflows rely on: the equipment move and
//! the request status write of an approval are observed together.

mod seed;

pub use seed::BOOTSTRAP_ADMIN_ID;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use indexmap::IndexMap;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        Branch, Equipment, Notification, NotificationLink, Recipient, RepairRequest,
        TransferRequest, User,
    },
};

/// Generate a fresh collision-resistant entity id
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Handle to the shared directory snapshot. Cheap to clone; services each
/// hold one and take the lock per operation.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<DirectoryState>>,
}

impl Store {
    pub fn new(state: DirectoryState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Empty store, no seed data. Mostly useful in tests.
    pub fn empty() -> Self {
        Self::new(DirectoryState::default())
    }

    /// Store rebuilt from the fixed seed dataset, as at process start
    pub fn seeded() -> Self {
        Self::new(seed::initial_state())
    }

    pub fn read(&self) -> RwLockReadGuard<'_, DirectoryState> {
        self.inner.read().expect("directory store lock poisoned")
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, DirectoryState> {
        self.inner.write().expect("directory store lock poisoned")
    }
}

/// The mutable entity collections. Maps preserve insertion order so listings
/// are stable. Lookups hand out clones; mutation goes through full
/// replacement, so no partial in-place edit is visible outside an operation.
#[derive(Debug, Default)]
pub struct DirectoryState {
    users: IndexMap<String, User>,
    branches: IndexMap<String, Branch>,
    equipment: IndexMap<String, Equipment>,
    transfers: IndexMap<String, TransferRequest>,
    repairs: IndexMap<String, RepairRequest>,
    notifications: IndexMap<String, Notification>,
}

impl DirectoryState {
    // -- users --------------------------------------------------------------

    pub fn user(&self, id: &str) -> AppResult<User> {
        self.users
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users.values().find(|u| u.username == username).cloned()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn insert_user(&mut self, user: User) -> AppResult<()> {
        if self.users.contains_key(&user.id) {
            return Err(AppError::Internal(format!("duplicate user id {}", user.id)));
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    pub fn replace_user(&mut self, user: User) -> AppResult<()> {
        if !self.users.contains_key(&user.id) {
            return Err(AppError::NotFound(format!("User {} not found", user.id)));
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    pub fn remove_user(&mut self, id: &str) -> AppResult<()> {
        self.users
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    // -- branches -----------------------------------------------------------

    pub fn branch(&self, id: &str) -> AppResult<Branch> {
        self.branches
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Branch {} not found", id)))
    }

    pub fn branches(&self) -> Vec<Branch> {
        self.branches.values().cloned().collect()
    }

    pub fn first_branch(&self) -> Option<Branch> {
        self.branches.values().next().cloned()
    }

    pub fn insert_branch(&mut self, branch: Branch) -> AppResult<()> {
        if self.branches.contains_key(&branch.id) {
            return Err(AppError::Internal(format!(
                "duplicate branch id {}",
                branch.id
            )));
        }
        self.branches.insert(branch.id.clone(), branch);
        Ok(())
    }

    pub fn replace_branch(&mut self, branch: Branch) -> AppResult<()> {
        if !self.branches.contains_key(&branch.id) {
            return Err(AppError::NotFound(format!(
                "Branch {} not found",
                branch.id
            )));
        }
        self.branches.insert(branch.id.clone(), branch);
        Ok(())
    }

    pub fn remove_branch(&mut self, id: &str) -> AppResult<()> {
        self.branches
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Branch {} not found", id)))
    }

    // -- equipment ----------------------------------------------------------

    pub fn equipment(&self, id: &str) -> AppResult<Equipment> {
        self.equipment
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub fn equipment_list(&self) -> Vec<Equipment> {
        self.equipment.values().cloned().collect()
    }

    pub fn insert_equipment(&mut self, item: Equipment) -> AppResult<()> {
        if self.equipment.contains_key(&item.id) {
            return Err(AppError::Internal(format!(
                "duplicate equipment id {}",
                item.id
            )));
        }
        self.equipment.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn replace_equipment(&mut self, item: Equipment) -> AppResult<()> {
        if !self.equipment.contains_key(&item.id) {
            return Err(AppError::NotFound(format!(
                "Equipment {} not found",
                item.id
            )));
        }
        self.equipment.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn remove_equipment(&mut self, id: &str) -> AppResult<()> {
        self.equipment
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    // -- transfer requests --------------------------------------------------

    pub fn transfer(&self, id: &str) -> AppResult<TransferRequest> {
        self.transfers
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Transfer request {} not found", id)))
    }

    pub fn transfers(&self) -> Vec<TransferRequest> {
        self.transfers.values().cloned().collect()
    }

    pub fn insert_transfer(&mut self, request: TransferRequest) -> AppResult<()> {
        if self.transfers.contains_key(&request.id) {
            return Err(AppError::Internal(format!(
                "duplicate transfer id {}",
                request.id
            )));
        }
        self.transfers.insert(request.id.clone(), request);
        Ok(())
    }

    pub fn replace_transfer(&mut self, request: TransferRequest) -> AppResult<()> {
        if !self.transfers.contains_key(&request.id) {
            return Err(AppError::NotFound(format!(
                "Transfer request {} not found",
                request.id
            )));
        }
        self.transfers.insert(request.id.clone(), request);
        Ok(())
    }

    // -- repair requests ----------------------------------------------------

    pub fn repair(&self, id: &str) -> AppResult<RepairRequest> {
        self.repairs
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Repair request {} not found", id)))
    }

    pub fn repairs(&self) -> Vec<RepairRequest> {
        self.repairs.values().cloned().collect()
    }

    pub fn insert_repair(&mut self, request: RepairRequest) -> AppResult<()> {
        if self.repairs.contains_key(&request.id) {
            return Err(AppError::Internal(format!(
                "duplicate repair id {}",
                request.id
            )));
        }
        self.repairs.insert(request.id.clone(), request);
        Ok(())
    }

    pub fn replace_repair(&mut self, request: RepairRequest) -> AppResult<()> {
        if !self.repairs.contains_key(&request.id) {
            return Err(AppError::NotFound(format!(
                "Repair request {} not found",
                request.id
            )));
        }
        self.repairs.insert(request.id.clone(), request);
        Ok(())
    }

    // -- notifications ------------------------------------------------------

    /// Append a notification. Lives on the state so a workflow transition
    /// and its alert land under the same lock acquisition.
    pub fn push_notification(
        &mut self,
        recipient: Recipient,
        title: impl Into<String>,
        message: impl Into<String>,
        link: NotificationLink,
    ) -> Notification {
        let notification = Notification {
            id: fresh_id(),
            recipient,
            title: title.into(),
            message: message.into(),
            link,
            read: false,
            timestamp: Utc::now(),
        };
        self.notifications
            .insert(notification.id.clone(), notification.clone());
        notification
    }

    pub fn notification(&self, id: &str) -> AppResult<Notification> {
        self.notifications
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.values().cloned().collect()
    }

    pub fn replace_notification(&mut self, notification: Notification) -> AppResult<()> {
        if !self.notifications.contains_key(&notification.id) {
            return Err(AppError::NotFound(format!(
                "Notification {} not found",
                notification.id
            )));
        }
        self.notifications
            .insert(notification.id.clone(), notification);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RequestStatus, Role};

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            username: name.to_string(),
            password: "123".to_string(),
            role: Role::Manager,
            branch_id: Some("1".to_string()),
            contact_number: String::new(),
            email: None,
            status: RequestStatus::Approved,
        }
    }

    #[test]
    fn listings_keep_insertion_order() {
        let mut state = DirectoryState::default();
        state.insert_user(user("b", "beta")).unwrap();
        state.insert_user(user("a", "alpha")).unwrap();
        state.insert_user(user("c", "gamma")).unwrap();

        let names: Vec<_> = state.users().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn replace_requires_existing_id() {
        let mut state = DirectoryState::default();
        let err = state.replace_user(user("ghost", "ghost")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut state = DirectoryState::default();
        state.insert_user(user("a", "first")).unwrap();
        let err = state.insert_user(user("a", "second")).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn seeded_store_matches_reference_dataset() {
        let store = Store::seeded();
        let state = store.read();

        assert_eq!(state.users().len(), 3);
        assert_eq!(state.branches().len(), 2);
        assert_eq!(state.equipment_list().len(), 3);

        let admin = state.user_by_username("Admin").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.branch_id, None);

        let hq = state.branch("1").unwrap();
        assert_eq!(hq.code, "HQ001");
        assert_eq!(hq.manager_id.as_deref(), Some("2"));

        let crane = state.equipment("3").unwrap();
        assert_eq!(crane.branch_id, "2");
    }
}
