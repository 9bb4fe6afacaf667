//! Reasons a presented session token is rejected.

use thiserror::Error;

use leaveboard_core::error::AppError;

/// Why a request could not be authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No token was presented.
    #[error("No token, authorization denied")]
    Missing,
    /// Malformed token or bad signature.
    #[error("Token is not valid")]
    Invalid,
    /// Signature is valid but the token is past its expiry.
    #[error("Token expired!")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::authentication(err.to_string())
    }
}
