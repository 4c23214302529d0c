//! API handlers for EquipMaster REST endpoints

pub mod auth;
pub mod branches;
pub mod equipment;
pub mod health;
pub mod notifications;
pub mod openapi;
pub mod repairs;
pub mod stats;
pub mod transfers;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::User, AppState};

/// Extractor for the authenticated user behind a bearer session token
pub struct AuthenticatedUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let user = state.services.auth.authenticated_user(token)?;
        Ok(AuthenticatedUser(user))
    }
}

/// Pull the bearer token out of the Authorization header
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Authentication("Invalid authorization header format".to_string())
    })
}
