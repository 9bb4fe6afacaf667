//! Login: exchange email and password for a session token.

use std::sync::Arc;

use tracing::{info, warn};

use leaveboard_auth::jwt::{IssuedToken, JwtEncoder};
use leaveboard_auth::password::PasswordHasher;
use leaveboard_core::error::AppError;
use leaveboard_core::result::AppResult;
use leaveboard_database::PersonnelStore;
use leaveboard_entity::personnel::normalize_email;

/// Password verified against unknown emails so both failure paths cost one bcrypt check.
const DECOY_PASSWORD: &str = "leaveboard-decoy-password";

/// Handles credential login.
#[derive(Clone)]
pub struct AuthService {
    /// Credential store.
    personnel_store: Arc<dyn PersonnelStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token issuer.
    encoder: Arc<JwtEncoder>,
    /// Hash of [`DECOY_PASSWORD`] at the configured cost.
    decoy_hash: String,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        personnel_store: Arc<dyn PersonnelStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> AppResult<Self> {
        let decoy_hash = hasher.hash_password(DECOY_PASSWORD)?;
        Ok(Self {
            personnel_store,
            hasher,
            encoder,
            decoy_hash,
        })
    }

    /// Authenticates with email and password and issues a session token.
    ///
    /// Unknown email and wrong password yield the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let email = normalize_email(email);
        let personnel = self.personnel_store.find_by_email(&email).await?;

        let hash = personnel
            .as_ref()
            .map_or(self.decoy_hash.as_str(), |p| p.password_hash.as_str());
        let matches = self.hasher.verify_password(password, hash)?;

        let personnel = match personnel {
            Some(p) if matches => p,
            _ => {
                warn!(email = %email, "Login failed");
                return Err(AppError::invalid_credentials());
            }
        };

        let token = self.encoder.issue(personnel.id)?;
        info!(personnel_id = %personnel.id, "Personnel logged in");

        Ok(token)
    }
}
