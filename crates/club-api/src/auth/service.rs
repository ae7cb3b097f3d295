//! Authentication service layer
//!
//! Business logic for account registration, login, and profile lookup.
//! Orchestrates the credential hasher, token issuance, and the account store.

use super::jwt::issue_token;
use super::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::store::UserRepository;
use club_core::config::AuthConfig;
use club_core::models::{User, UserRole};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use validator::Validate;

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful authentication response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Session token to present as `Authorization: Bearer <token>`
    pub token: String,
    /// The authenticated account
    pub user: User,
}

/// Authentication service
pub struct AuthService {
    users: UserRepository,
    auth_config: AuthConfig,
}

impl AuthService {
    /// Create a new authentication service
    ///
    /// The signing configuration is injected here; nothing in the service
    /// reads process environment at request time.
    pub fn new(pool: PgPool, auth_config: AuthConfig) -> Self {
        Self {
            users: UserRepository::new(pool),
            auth_config,
        }
    }

    /// Register a new account and issue a session token
    ///
    /// New accounts get the "user" role. A duplicate email or username is a
    /// conflict.
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(format!("Invalid input: {e}")))?;

        let exists = self
            .users
            .exists_by_email_or_username(&request.email, &request.username)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check if user exists: {e}")))?;

        if exists {
            return Err(AppError::Conflict(
                "User with this email or username already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))?;

        let user = self
            .users
            .create_user(
                &request.username,
                &request.email,
                &password_hash,
                UserRole::User.as_str(),
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to create user: {e}")))?;

        let token = issue_token(&self.auth_config, &user)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {e}")))?;

        tracing::info!(user_id = user.id, "account registered");

        Ok(TokenResponse { token, user })
    }

    /// Login with email and password
    ///
    /// An unknown email and a wrong password collapse into the same
    /// rejection, so callers cannot enumerate accounts.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(format!("Invalid input: {e}")))?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch user: {e}")))?
            .ok_or(AppError::Unauthorized)?;

        if !verify_password(&request.password, &user.password_hash) {
            tracing::info!(user_id = user.id, "failed login attempt");
            return Err(AppError::Unauthorized);
        }

        let token = issue_token(&self.auth_config, &user)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {e}")))?;

        tracing::info!(user_id = user.id, "login successful");

        Ok(TokenResponse { token, user })
    }

    /// Get account info by id
    pub async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch user: {e}")))?
            .ok_or_else(|| AppError::NotFound("User".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "newmember".to_string(),
            email: "member@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..valid.clone()
        };
        assert!(short_password.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_username = RegisterRequest {
            username: "ab".to_string(),
            ..valid
        };
        assert!(short_username.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "member@example.com".to_string(),
            password: "whatever".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_password = LoginRequest {
            password: String::new(),
            ..valid
        };
        assert!(empty_password.validate().is_err());
    }
}
