//! Authentication and registration workflow
//!
//! Credentials are compared verbatim; sessions are opaque bearer tokens in
//! an in-memory table, cleared on restart along with everything else.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    config::UsersConfig,
    error::{AppError, AppResult},
    models::{
        notification::{NotificationLink, Recipient},
        user::{ChangePassword, RegisterUser},
        RequestStatus, Role, User,
    },
    policy,
    store::{self, Store},
};

#[derive(Clone)]
pub struct AuthService {
    store: Store,
    config: UsersConfig,
    sessions: Arc<RwLock<HashMap<String, String>>>,
}

impl AuthService {
    pub fn new(store: Store, config: UsersConfig) -> Self {
        Self {
            store,
            config,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Authenticate by exact username + password match and open a session
    pub fn login(&self, username: &str, password: &str) -> AppResult<(String, User)> {
        let user = {
            let state = self.store.read();
            state
                .users()
                .into_iter()
                .find(|u| u.username == username && u.password == password)
                .ok_or(AppError::InvalidCredentials)?
        };

        if user.status != RequestStatus::Approved {
            return Err(AppError::PendingApproval);
        }

        let token = store::fresh_id();
        self.sessions
            .write()
            .expect("session table lock poisoned")
            .insert(token.clone(), user.id.clone());

        tracing::info!(user_id = %user.id, "user logged in");
        Ok((token, user))
    }

    /// Resolve a bearer token to its session user
    pub fn authenticated_user(&self, token: &str) -> AppResult<User> {
        let user_id = self
            .sessions
            .read()
            .expect("session table lock poisoned")
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::Authentication("Invalid session token".to_string()))?;

        let user = self
            .store
            .read()
            .user(&user_id)
            .map_err(|_| AppError::Authentication("Session user no longer exists".to_string()))?;

        if user.status != RequestStatus::Approved {
            return Err(AppError::Authentication(
                "Account is no longer approved".to_string(),
            ));
        }
        Ok(user)
    }

    /// Drop a session; unknown tokens are ignored
    pub fn logout(&self, token: &str) {
        self.sessions
            .write()
            .expect("session table lock poisoned")
            .remove(token);
    }

    /// Self-registration: stores the candidate PENDING and alerts admins.
    /// Role, password and branch fall back to defaults when omitted.
    pub fn register(&self, candidate: RegisterUser) -> AppResult<User> {
        let mut state = self.store.write();

        let branch_id = match candidate.branch_id {
            Some(id) => Some(id),
            None => state.first_branch().map(|b| b.id),
        };

        let user = User {
            id: store::fresh_id(),
            username: candidate.username,
            password: candidate
                .password
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| self.config.default_password.clone()),
            role: candidate.role.unwrap_or(Role::Manager),
            branch_id,
            contact_number: candidate.contact_number.unwrap_or_default(),
            email: candidate.email,
            status: RequestStatus::Pending,
        };

        state.insert_user(user.clone())?;
        state.push_notification(
            Recipient::Admins,
            "User approval needed",
            format!("{} has requested access.", user.username),
            NotificationLink::AdminPanel,
        );

        tracing::info!(user_id = %user.id, username = %user.username, "registration submitted");
        Ok(user)
    }

    /// Admin approval of a pending registration. No cascade: requests the
    /// user already created are untouched.
    pub fn approve(&self, actor: &User, user_id: &str) -> AppResult<User> {
        policy::ensure_admin(actor, "User approval")?;

        let mut state = self.store.write();
        let mut user = state.user(user_id)?;
        user.status = RequestStatus::Approved;
        state.replace_user(user.clone())?;

        tracing::info!(user_id = %user.id, "registration approved");
        Ok(user)
    }

    /// Admin rejection of a pending registration
    pub fn reject(&self, actor: &User, user_id: &str) -> AppResult<User> {
        policy::ensure_admin(actor, "User rejection")?;

        let mut state = self.store.write();
        let mut user = state.user(user_id)?;
        user.status = RequestStatus::Rejected;
        state.replace_user(user.clone())?;

        tracing::info!(user_id = %user.id, "registration rejected");
        Ok(user)
    }

    /// Change the acting user's own password; the old one must match
    pub fn change_password(&self, actor: &User, change: ChangePassword) -> AppResult<()> {
        if change.new_password.trim().is_empty() {
            return Err(AppError::Validation(
                "New password must not be empty".to_string(),
            ));
        }

        let mut state = self.store.write();
        let mut user = state.user(&actor.id)?;
        if user.password != change.old_password {
            return Err(AppError::InvalidCredentials);
        }
        user.password = change.new_password;
        state.replace_user(user)?;
        Ok(())
    }
}
