//! Dashboard counters and activity history

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::RequestStatus,
    store::Store,
};

/// Dashboard totals
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_branches: usize,
    pub total_equipment: usize,
    pub pending_users: usize,
    pub pending_transfers: usize,
    pub pending_repairs: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Transfer,
    Repair,
}

/// One row of the combined transfer/repair history. `branch_id` is the
/// source branch for transfers and the reporting branch for repairs.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryEntry {
    pub kind: ActivityKind,
    pub id: String,
    pub equipment_id: String,
    pub branch_id: String,
    pub target_branch_id: String,
    pub status: RequestStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone)]
pub struct StatsService {
    store: Store,
}

impl StatsService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn dashboard(&self) -> DashboardStats {
        let state = self.store.read();
        DashboardStats {
            total_branches: state.branches().len(),
            total_equipment: state.equipment_list().len(),
            pending_users: state
                .users()
                .iter()
                .filter(|u| u.status == RequestStatus::Pending)
                .count(),
            pending_transfers: state
                .transfers()
                .iter()
                .filter(|t| t.status == RequestStatus::Pending)
                .count(),
            pending_repairs: state
                .repairs()
                .iter()
                .filter(|r| r.status == RequestStatus::Pending)
                .count(),
        }
    }

    /// Transfers and repairs merged, newest first. A branch filter matches
    /// either side of the movement.
    pub fn history(&self, branch_id: Option<&str>) -> Vec<HistoryEntry> {
        let state = self.store.read();

        let mut entries: Vec<HistoryEntry> = state
            .transfers()
            .into_iter()
            .map(|t| HistoryEntry {
                kind: ActivityKind::Transfer,
                id: t.id,
                equipment_id: t.equipment_id,
                branch_id: t.source_branch_id,
                target_branch_id: t.target_branch_id,
                status: t.status,
                timestamp: t.timestamp,
            })
            .chain(state.repairs().into_iter().map(|r| HistoryEntry {
                kind: ActivityKind::Repair,
                id: r.id,
                equipment_id: r.equipment_id,
                branch_id: r.branch_id,
                target_branch_id: r.target_branch_id,
                status: r.status,
                timestamp: r.timestamp,
            }))
            .collect();

        if let Some(branch) = branch_id {
            entries.retain(|e| e.branch_id == branch || e.target_branch_id == branch);
        }
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }
}
