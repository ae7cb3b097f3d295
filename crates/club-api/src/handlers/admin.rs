//! Administration handlers
//!
//! Routes in this group sit behind the admin-route guard.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::UserRepository;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// List all accounts
///
/// # Responses
///
/// * `200 OK` - All accounts, newest first
/// * `401 Unauthorized` - Missing or invalid token
/// * `403 Forbidden` - Authenticated but not an admin
/// * `500 Internal Server Error` - Server error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    responses(
        (status = 200, description = "All accounts", body = [club_core::models::User]),
        (status = 401, description = "Unauthorized", body = crate::error::ApiError),
        (status = 403, description = "Admin access required", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserRepository::new(state.db_pool.clone())
        .list_users()
        .await
        .map_err(|e| AppError::Database(format!("Failed to fetch users: {e}")))?;

    Ok(Json(users))
}
