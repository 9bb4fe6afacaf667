//! `AuthPersonnel` extractor: pulls the session token from the request,
//! verifies it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use leaveboard_auth::jwt::TokenError;
use leaveboard_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Fallback header carrying a bare token.
pub const TOKEN_HEADER: &str = "x-auth-token";

/// Extracted authenticated personnel context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthPersonnel(pub RequestContext);

impl AuthPersonnel {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthPersonnel {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthPersonnel {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)?;
        let claims = state.jwt_decoder.verify(token)?;
        Ok(AuthPersonnel(RequestContext::from_claims(&claims)))
    }
}

/// Reads `Authorization: Bearer <token>`, falling back to `x-auth-token`.
fn extract_token(headers: &HeaderMap) -> Result<&str, TokenError> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        let value = value.to_str().map_err(|_| TokenError::Invalid)?;
        return value.strip_prefix("Bearer ").ok_or(TokenError::Invalid);
    }

    headers
        .get(TOKEN_HEADER)
        .map(|v| v.to_str().map_err(|_| TokenError::Invalid))
        .transpose()?
        .ok_or(TokenError::Missing)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_extract_token_sources() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), Err(TokenError::Missing));

        headers.insert(TOKEN_HEADER, HeaderValue::from_static("abc"));
        assert_eq!(extract_token(&headers), Ok("abc"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));
        assert_eq!(extract_token(&headers), Ok("xyz"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(extract_token(&headers), Err(TokenError::Invalid));
    }
}
