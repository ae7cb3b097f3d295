//! Middleware for protecting authenticated and admin routes
//!
//! Extracts and validates bearer tokens from the Authorization header. On
//! success, the authenticated account is added to request extensions; the
//! guards here are the only writers of that extension, so a handler that
//! finds it absent must treat the request as unauthenticated.

use super::jwt::{validate_token, Claims, JwtError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use thiserror::Error;

/// Authenticated account information extracted from a session token
///
/// Added to request extensions by the guards and available in handlers via
/// `Extension<AuthenticatedUser>`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Account id
    pub user_id: i64,
    /// Account role ("user" or "admin")
    pub role: String,
}

impl AuthenticatedUser {
    /// Check if the account has the admin role
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

/// Guard rejection reasons
///
/// Every token-validation sub-reason surfaces as the same generic 401 body.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization header is required")]
    MissingAuthHeader,

    #[error("Authorization header format must be Bearer <token>")]
    InvalidAuthHeader,

    #[error("Invalid or expired token")]
    InvalidToken(#[source] JwtError),

    #[error("Admin access required")]
    InsufficientPermissions,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingAuthHeader => {
                (StatusCode::UNAUTHORIZED, "Authorization header is required")
            }
            AuthError::InvalidAuthHeader => (
                StatusCode::UNAUTHORIZED,
                "Authorization header format must be Bearer <token>",
            ),
            AuthError::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, "Admin access required"),
        };

        let body = serde_json::json!({ "error": message });

        (status, Json(body)).into_response()
    }
}

/// Shared extraction and validation step for both guards
///
/// The header must be exactly two space-separated parts with the first part
/// literally `Bearer`. On success the account is inserted into request
/// extensions and returned to the caller.
fn authenticate(
    state: &AppState,
    request: &mut Request<Body>,
) -> Result<AuthenticatedUser, AuthError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let parts: Vec<&str> = auth_header.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AuthError::InvalidAuthHeader);
    }

    let claims = validate_token(&state.config.auth, parts[1]).map_err(|e| {
        tracing::debug!(reason = %e, "rejected bearer token");
        AuthError::InvalidToken(e)
    })?;

    let user = AuthenticatedUser::from(claims);
    request.extensions_mut().insert(user.clone());

    Ok(user)
}

/// Guard for authenticated routes
///
/// # Usage
///
/// ```ignore
/// use axum::{middleware, routing::get, Router};
/// use club_api::auth::middleware::require_auth;
///
/// let app = Router::new()
///     .route("/me", get(me_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    authenticate(&state, &mut request)?;

    Ok(next.run(request).await)
}

/// Guard for admin routes
///
/// Runs the same extraction and validation step as [`require_auth`] inline,
/// then requires the admin role. A missing or invalid token is rejected as
/// unauthenticated (401); a valid token without the admin role is rejected
/// as forbidden (403).
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let user = authenticate(&state, &mut request)?;

    if !user.is_admin() {
        return Err(AuthError::InsufficientPermissions);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_from_claims() {
        let claims = Claims {
            user_id: 42,
            role: "admin".to_string(),
            sub: "42".to_string(),
            iat: 1000,
            exp: 2000,
        };

        let user = AuthenticatedUser::from(claims);

        assert_eq!(user.user_id, 42);
        assert_eq!(user.role, "admin");
    }

    #[test]
    fn test_is_admin() {
        let admin = AuthenticatedUser {
            user_id: 1,
            role: "admin".to_string(),
        };
        let member = AuthenticatedUser {
            user_id: 2,
            role: "user".to_string(),
        };

        assert!(admin.is_admin());
        assert!(!member.is_admin());
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            AuthError::MissingAuthHeader.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidAuthHeader.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidToken(JwtError::InvalidToken)
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InsufficientPermissions.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
