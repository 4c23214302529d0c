//! Dashboard statistics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::services::stats::{DashboardStats, HistoryEntry};

use super::AuthenticatedUser;

#[derive(Deserialize, IntoParams)]
pub struct HistoryQuery {
    /// Restrict entries to movements touching this branch
    pub branch_id: Option<String>,
}

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard totals", body = DashboardStats),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn dashboard_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Json<DashboardStats> {
    Json(state.services.stats.dashboard())
}

/// Combined transfer and repair history, newest first
#[utoipa::path(
    get,
    path = "/stats/history",
    tag = "stats",
    security(("bearer_auth" = [])),
    params(HistoryQuery),
    responses(
        (status = 200, description = "Activity history", body = Vec<HistoryEntry>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn activity_history(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<HistoryEntry>> {
    Json(state.services.stats.history(query.branch_id.as_deref()))
}
