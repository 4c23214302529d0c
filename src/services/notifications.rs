//! Notification delivery
//!
//! Workflows append notifications through the store under their own lock;
//! this service covers the read side: visibility-filtered listing and the
//! idempotent read flag.

use crate::{
    error::{AppError, AppResult},
    models::{Notification, User},
    store::Store,
};

#[derive(Clone)]
pub struct NotificationsService {
    store: Store,
}

impl NotificationsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Notifications visible to the subject, newest first. A notification is
    /// visible on a direct addressee match, or to any admin for broadcasts.
    pub fn list_for(&self, subject: &User) -> Vec<Notification> {
        let mut visible: Vec<Notification> = self
            .store
            .read()
            .notifications()
            .into_iter()
            .filter(|n| n.visible_to(subject))
            .collect();
        visible.reverse();
        visible
    }

    /// Flip the read flag; idempotent. Only a subject the notification is
    /// visible to may mark it.
    pub fn mark_read(&self, subject: &User, id: &str) -> AppResult<Notification> {
        let mut state = self.store.write();
        let mut notification = state.notification(id)?;
        if !notification.visible_to(subject) {
            return Err(AppError::Forbidden(
                "Notification is not addressed to you".to_string(),
            ));
        }
        notification.read = true;
        state.replace_notification(notification.clone())?;
        Ok(notification)
    }
}
