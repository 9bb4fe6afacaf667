//! bcrypt password hashing and verification.

use leaveboard_core::config::AuthConfig;
use leaveboard_core::error::AppError;

/// Handles password hashing and verification using bcrypt.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Work factor applied to every new hash.
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher using the configured work factor.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_cost(config.bcrypt_cost)
    }

    /// Creates a hasher with an explicit work factor.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password with a freshly generated salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a stored bcrypt hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = hasher();
        for password in ["123456", "correct horse battery staple", "pässwörd"] {
            let hash = hasher.hash_password(password).expect("hash");
            assert_ne!(hash, password);
            assert!(hasher.verify_password(password, &hash).expect("verify"));
        }
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hasher = hasher();
        let hash = hasher.hash_password("123456").expect("hash");
        assert!(!hasher.verify_password("1234567", &hash).expect("verify"));
        assert!(!hasher.verify_password("", &hash).expect("verify"));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let hasher = hasher();
        let a = hasher.hash_password("123456").expect("hash");
        let b = hasher.hash_password("123456").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn test_configured_cost_is_encoded() {
        let hash = PasswordHasher::new(&AuthConfig {
            bcrypt_cost: 4,
            ..AuthConfig::default()
        })
        .hash_password("123456")
        .expect("hash");
        assert!(hash.starts_with("$2b$04$"));
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(hasher().verify_password("123456", "not-a-hash").is_err());
    }
}
