//! Session token verification.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use leaveboard_core::config::AuthConfig;
use leaveboard_core::traits::Clock;

use super::claims::Claims;
use super::error::TokenError;

/// Validates session tokens against the shared secret and the clock.
///
/// Holds no mutable state; safe to share across concurrent requests.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature and structure checks. Expiry is checked against `clock`.
    validation: Validation,
    /// Allowed clock skew in seconds.
    leeway_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            leeway_seconds: i64::try_from(config.leeway_seconds).unwrap_or(0),
            clock,
        }
    }

    /// Verifies a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| TokenError::Invalid)?
            .claims;

        if self.clock.now().timestamp() > claims.exp.saturating_add(self.leeway_seconds) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
