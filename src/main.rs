//! EquipMaster Server - Equipment Tracking System
//!
//! A REST API server for multi-branch equipment tracking.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use equipmaster_server::{api, config::AppConfig, services::Services, store::Store, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "equipmaster_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EquipMaster Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Seed the in-memory directory and wire up services
    let store = Store::seeded();
    let services = Services::new(store, config.users.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/me", get(api::auth::me))
        .route("/auth/password", put(api::auth::change_password))
        .route("/auth/logout", post(api::auth::logout))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        .route("/users/:id/approve", post(api::users::approve_user))
        .route("/users/:id/reject", post(api::users::reject_user))
        // Branches
        .route("/branches", get(api::branches::list_branches))
        .route("/branches", post(api::branches::create_branch))
        .route("/branches/:id", get(api::branches::get_branch))
        .route("/branches/:id", put(api::branches::update_branch))
        .route("/branches/:id", delete(api::branches::delete_branch))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        // Transfers
        .route("/transfers", get(api::transfers::list_transfers))
        .route("/transfers", post(api::transfers::request_transfer))
        .route("/transfers/:id", get(api::transfers::get_transfer))
        .route("/transfers/:id/process", post(api::transfers::process_transfer))
        // Repairs
        .route("/repairs", get(api::repairs::list_repairs))
        .route("/repairs", post(api::repairs::request_repair))
        .route("/repairs/:id", get(api::repairs::get_repair))
        .route("/repairs/:id/process", post(api::repairs::process_repair))
        // Notifications
        .route("/notifications", get(api::notifications::list_notifications))
        .route(
            "/notifications/:id/read",
            post(api::notifications::mark_notification_read),
        )
        // Statistics
        .route("/stats", get(api::stats::dashboard_stats))
        .route("/stats/history", get(api::stats::activity_history))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
