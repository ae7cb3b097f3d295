//! Domain models for accounts and blog posts
//!
//! These map to the `users` and `posts` tables in PostgreSQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User role enum
///
/// Defines the access level for an account:
/// - Admin: full access including the admin route group
/// - User: default role for registered members
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    /// Convert role to string representation
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    /// Parse role from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User account model
///
/// The password hash is never serialized in API responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct User {
    /// Unique user identifier
    pub id: i64,

    /// Display name (unique)
    pub username: String,

    /// Email address (unique, used for login)
    pub email: String,

    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// User's role ("user" or "admin")
    pub role: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the account has the admin role
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin.as_str()
    }
}

/// Blog post model
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    /// Unique post identifier
    pub id: i64,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Authoring user's id
    pub author_id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: &str) -> User {
        User {
            id: 7,
            username: "casey".to_string(),
            email: "casey@example.com".to_string(),
            password_hash: "$2b$14$abcdefghijklmnopqrstuv".to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_role_conversion() {
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::User.as_str(), "user");

        assert_eq!(UserRole::from_str("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("USER"), Some(UserRole::User));
        assert_eq!(UserRole::from_str("invalid"), None);
    }

    #[test]
    fn test_is_admin() {
        assert!(sample_user("admin").is_admin());
        assert!(!sample_user("user").is_admin());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = sample_user("user");
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("casey@example.com"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$"));
    }
}
