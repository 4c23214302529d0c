//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, branches, equipment, health, notifications, repairs, stats, transfers, users,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EquipMaster API",
        version = "1.0.0",
        description = "Multi-branch equipment tracking and workflow REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::register,
        auth::me,
        auth::change_password,
        auth::logout,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::approve_user,
        users::reject_user,
        // Branches
        branches::list_branches,
        branches::get_branch,
        branches::create_branch,
        branches::update_branch,
        branches::delete_branch,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Transfers
        transfers::list_transfers,
        transfers::get_transfer,
        transfers::request_transfer,
        transfers::process_transfer,
        // Repairs
        repairs::list_repairs,
        repairs::get_repair,
        repairs::request_repair,
        repairs::process_repair,
        // Notifications
        notifications::list_notifications,
        notifications::mark_notification_read,
        // Stats
        stats::dashboard_stats,
        stats::activity_history,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            crate::models::user::RegisterUser,
            crate::models::user::ChangePassword,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::Role,
            crate::models::RequestStatus,
            crate::models::Decision,
            // Branches
            crate::models::branch::Branch,
            crate::models::branch::CreateBranch,
            crate::models::branch::UpdateBranch,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Transfers
            crate::models::transfer::TransferRequest,
            crate::models::transfer::CreateTransferRequest,
            transfers::ProcessTransferRequest,
            // Repairs
            crate::models::repair::RepairRequest,
            crate::models::repair::CreateRepairRequest,
            repairs::ProcessRepairRequest,
            // Notifications
            crate::models::notification::Notification,
            crate::models::notification::Recipient,
            crate::models::notification::NotificationLink,
            // Stats
            crate::services::stats::DashboardStats,
            crate::services::stats::HistoryEntry,
            crate::services::stats::ActivityKind,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication and registration"),
        (name = "users", description = "User management"),
        (name = "branches", description = "Branch management"),
        (name = "equipment", description = "Equipment management"),
        (name = "transfers", description = "Equipment transfer workflow"),
        (name = "repairs", description = "Equipment repair workflow"),
        (name = "notifications", description = "User notifications"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
