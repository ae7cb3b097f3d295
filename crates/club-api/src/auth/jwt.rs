//! JWT token generation and validation
//!
//! Implements session tokens with HMAC-SHA256 signing. A token binds an
//! account id and role to an issuance time and a 24-hour expiry; the server
//! keeps no session state of its own.

use club_core::config::AuthConfig;
use club_core::models::User;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// JWT Claims structure containing account information
///
/// These claims are embedded in the session token and extracted during
/// validation. They are fixed at issuance and trusted as-is until expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub user_id: i64,
    /// Account role ("user" or "admin")
    pub role: String,
    /// Subject - account id as string
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: u64,
    /// Expiration timestamp (Unix epoch)
    pub exp: u64,
}

/// JWT token generation and validation errors
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode JWT: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid token format")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Unexpected signing algorithm")]
    InvalidAlgorithm,

    #[error("System time error: {0}")]
    SystemTimeError(#[from] std::time::SystemTimeError),
}

/// Generate a session token for an authenticated account
///
/// # Arguments
///
/// * `config` - Auth configuration carrying the signing secret and lifetime
/// * `user` - The account the token asserts
pub fn issue_token(config: &AuthConfig, user: &User) -> Result<String, JwtError> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    let claims = Claims {
        user_id: user.id,
        role: user.role.clone(),
        sub: user.id.to_string(),
        iat: now,
        exp: now + config.token_expiration_secs,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Validate a session token and extract its claims
///
/// The signature must have been produced under HS256; a token whose header
/// names any other algorithm (including `none`) is rejected regardless of
/// signature correctness. Expiry is checked with zero leeway.
pub fn validate_token(config: &AuthConfig, token: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => JwtError::InvalidAlgorithm,
        _ => JwtError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use chrono::Utc;

    fn test_config() -> AuthConfig {
        AuthConfig::default()
    }

    fn test_user(id: i64, role: &str) -> User {
        User {
            id,
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_validate_token() {
        let config = test_config();
        let user = test_user(42, "user");

        let token = issue_token(&config, &user).expect("Failed to issue token");
        let claims = validate_token(&config, &token).expect("Failed to validate token");

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.role, "user");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.exp, claims.iat + config.token_expiration_secs);
    }

    #[test]
    fn test_invalid_token() {
        let config = test_config();
        let result = validate_token(&config, "invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let config1 = AuthConfig {
            jwt_secret: "secret1".to_string(),
            ..Default::default()
        };
        let config2 = AuthConfig {
            jwt_secret: "secret2".to_string(),
            ..Default::default()
        };

        let token = issue_token(&config1, &test_user(1, "user")).unwrap();

        let result = validate_token(&config2, &token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_expired_token() {
        let config = test_config();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Issued 24 hours ago, expired one second ago
        let claims = Claims {
            user_id: 1,
            role: "user".to_string(),
            sub: "1".to_string(),
            iat: now - 86_400,
            exp: now - 1,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let result = validate_token(&config, &token);
        assert!(matches!(result, Err(JwtError::ExpiredToken)));
    }

    #[test]
    fn test_none_algorithm_rejected() {
        let config = test_config();
        let token = issue_token(&config, &test_user(1, "admin")).unwrap();

        // Rewrite the header to claim the unsigned "none" algorithm while
        // keeping the payload untouched
        let payload = token.split('.').nth(1).unwrap();
        let none_header = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(br#"{"alg":"none","typ":"JWT"}"#);
        let forged = format!("{none_header}.{payload}.");

        let result = validate_token(&config, &forged);
        assert!(result.is_err());
    }

    #[test]
    fn test_tampered_role_rejected() {
        let config = test_config();
        let token = issue_token(&config, &test_user(1, "user")).unwrap();

        // Swap the payload for one claiming the admin role; the signature no
        // longer matches
        let mut parts = token.split('.');
        let header = parts.next().unwrap();
        let signature = parts.nth(1).unwrap();

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let forged_claims = serde_json::json!({
            "user_id": 1,
            "role": "admin",
            "sub": "1",
            "iat": now,
            "exp": now + 3600,
        });
        let forged_payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(&forged_claims).unwrap());

        let forged = format!("{header}.{forged_payload}.{signature}");
        let result = validate_token(&config, &forged);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }
}
