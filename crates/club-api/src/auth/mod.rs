//! Authentication and authorization module
//!
//! This module provides token-based authentication with the following
//! components:
//! - Token issuance and validation (HMAC-SHA256)
//! - Password hashing with bcrypt
//! - Route guards for authenticated and admin-only access
//! - Authentication service for registration and login

pub mod jwt;
pub mod middleware;
pub mod password;
pub mod service;

pub use jwt::{issue_token, validate_token, Claims, JwtError};
pub use middleware::{require_admin, require_auth, AuthError, AuthenticatedUser};
pub use password::{hash_password, hash_password_with_cost, verify_password, BCRYPT_COST};
pub use service::{AuthService, LoginRequest, RegisterRequest, TokenResponse};
