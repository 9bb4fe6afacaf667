//! Session token creation.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use leaveboard_core::config::AuthConfig;
use leaveboard_core::error::AppError;
use leaveboard_core::traits::Clock;

use super::claims::{Claims, PersonnelClaim};

/// Creates signed, time-limited session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime in seconds.
    ttl_seconds: i64,
    /// Source of `iat`.
    clock: Arc<dyn Clock>,
}

/// A freshly issued session token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: i64::try_from(config.token_ttl_seconds).unwrap_or(i64::MAX),
            clock,
        }
    }

    /// Issues a token for the given personnel.
    pub fn issue(&self, personnel_id: Uuid) -> Result<IssuedToken, AppError> {
        let now = self.clock.now();
        let expires_at = Duration::try_seconds(self.ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Session lifetime of {} seconds is out of range",
                    self.ttl_seconds
                ))
            })?;

        let claims = Claims {
            personnel: PersonnelClaim { id: personnel_id },
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
