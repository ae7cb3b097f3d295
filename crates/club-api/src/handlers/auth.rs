//! Authentication API handlers
//!
//! HTTP endpoints for account registration and login.

use crate::auth::{AuthService, LoginRequest, RegisterRequest, TokenResponse};
use crate::error::{AppError, AppJson};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Register a new account
///
/// Creates a new account with the provided username, email, and password and
/// immediately issues a session token. New accounts get the "user" role.
///
/// # Responses
///
/// * `201 Created` - Account registered, token and account returned
/// * `400 Bad Request` - Invalid input
/// * `409 Conflict` - Email or username already taken
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account registered", body = TokenResponse),
        (status = 400, description = "Invalid input", body = crate::error::ApiError),
        (status = 409, description = "Account already exists", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    )
)]
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(state.db_pool.clone(), state.config.auth.clone());
    let response = auth_service.register(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// Authenticates an account and returns a fresh session token. Unknown
/// email and wrong password produce the same rejection.
///
/// # Responses
///
/// * `200 OK` - Authentication successful
/// * `400 Bad Request` - Invalid input
/// * `401 Unauthorized` - Invalid credentials
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Invalid input", body = crate::error::ApiError),
        (status = 401, description = "Invalid credentials", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(state.db_pool.clone(), state.config.auth.clone());
    let response = auth_service.login(request).await?;

    Ok(Json(response))
}
