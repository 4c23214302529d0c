//! Business logic services
//!
//! All decision logic lives here; API handlers only translate HTTP to
//! service calls. Every service holds a handle to the shared directory
//! store and takes its lock once per operation.

pub mod auth;
pub mod directory;
pub mod notifications;
pub mod repairs;
pub mod stats;
pub mod transfers;

use crate::{config::UsersConfig, store::Store};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub directory: directory::DirectoryService,
    pub transfers: transfers::TransfersService,
    pub repairs: repairs::RepairsService,
    pub notifications: notifications::NotificationsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Store, users_config: UsersConfig) -> Self {
        Self {
            auth: auth::AuthService::new(store.clone(), users_config),
            directory: directory::DirectoryService::new(store.clone()),
            transfers: transfers::TransfersService::new(store.clone()),
            repairs: repairs::RepairsService::new(store.clone()),
            notifications: notifications::NotificationsService::new(store.clone()),
            stats: stats::StatsService::new(store),
        }
    }
}
