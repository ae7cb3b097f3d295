//! Password hashing and verification using bcrypt
//!
//! Each hash carries its own random salt. Cost factor 14 keeps offline brute
//! force expensive while staying within interactive login latency.

use thiserror::Error;

/// bcrypt work factor for stored credentials
pub const BCRYPT_COST: u32 = 14;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
}

/// Hash a plaintext password with the production work factor
///
/// The returned string embeds the algorithm, cost, and salt and is safe to
/// store as-is.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash_password_with_cost(password, BCRYPT_COST)
}

/// Hash a password with an explicit work factor
///
/// Lower costs are for tests only.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, PasswordError> {
    bcrypt::hash(password, cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

/// Verify a plaintext password against a stored hash
///
/// Returns `false` for a mismatch or a malformed hash; a wrong password is
/// never an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost, to keep the test suite fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_password() {
        let password = "correct horse battery staple";
        let hash = hash_password_with_cost(password, TEST_COST).expect("Failed to hash password");

        assert!(verify_password(password, &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn test_same_password_produces_different_hashes() {
        // Random salt: same password, different hashes
        let password = "SamePassword123";

        let hash1 = hash_password_with_cost(password, TEST_COST).unwrap();
        let hash2 = hash_password_with_cost(password, TEST_COST).unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password(password, &hash1));
        assert!(verify_password(password, &hash2));
    }

    #[test]
    fn test_malformed_hash_is_false_not_error() {
        assert!(!verify_password("password", "not-a-bcrypt-hash"));
        assert!(!verify_password("password", ""));
    }

    #[test]
    fn test_hash_embeds_cost() {
        let hash = hash_password_with_cost("abcdefgh", TEST_COST).unwrap();
        assert!(hash.contains("$04$"));
    }
}
