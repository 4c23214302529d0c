//! Error types for EquipMaster server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account pending approval")]
    PendingApproval,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request already finalized: {0}")]
    AlreadyFinalized(String),

    #[error("Protected account: {0}")]
    ProtectedAccount(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Authentication(_) => (StatusCode::UNAUTHORIZED, "Authentication"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "InvalidCredentials"),
            AppError::PendingApproval => (StatusCode::FORBIDDEN, "PendingApproval"),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "Forbidden"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation"),
            AppError::AlreadyFinalized(_) => (StatusCode::CONFLICT, "AlreadyFinalized"),
            AppError::ProtectedAccount(_) => (StatusCode::CONFLICT, "ProtectedAccount"),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal")
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
