//! Authentication and registration endpoints

use axum::{
    extract::State,
    http::{request::Parts, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        user::{ChangePassword, RegisterUser},
        User,
    },
};

use super::AuthenticatedUser;

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the session token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub user: User,
}

/// Authenticate with username and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account pending approval")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, user) = state
        .services
        .auth
        .login(&request.username, &request.password)?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        user,
    }))
}

/// Self-register a new account (lands in the admin approval queue)
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "Registration submitted", body = User),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(candidate): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    candidate.validate()?;
    let user = state.services.auth.register(candidate)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Current session user
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}

/// Change the current user's password
#[utoipa::path(
    put,
    path = "/auth/password",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ChangePassword,
    responses(
        (status = 204, description = "Password updated"),
        (status = 401, description = "Old password does not match")
    )
)]
pub async fn change_password(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(change): Json<ChangePassword>,
) -> AppResult<StatusCode> {
    change.validate()?;
    state.services.auth.change_password(&user, change)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Drop the current session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session dropped")
    )
)]
pub async fn logout(
    State(state): State<crate::AppState>,
    parts: Parts,
) -> AppResult<StatusCode> {
    let token = super::bearer_token(&parts)?;
    state.services.auth.logout(token);
    Ok(StatusCode::NO_CONTENT)
}
