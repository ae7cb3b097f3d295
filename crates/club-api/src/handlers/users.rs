//! Account profile handlers

use crate::auth::{AuthService, AuthenticatedUser};
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Extension, Json};
use std::sync::Arc;

/// Get the current account
///
/// Returns the record for the authenticated account. The identity comes from
/// the guard-populated request context; an absent identity means the guard
/// was not applied and extraction fails closed.
///
/// # Responses
///
/// * `200 OK` - Account record
/// * `401 Unauthorized` - Missing or invalid token
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = "users",
    responses(
        (status = 200, description = "Current account", body = club_core::models::User),
        (status = 401, description = "Unauthorized", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn me_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(state.db_pool.clone(), state.config.auth.clone());
    let record = auth_service.get_user(user.user_id).await?;

    Ok(Json(record))
}
