//! Admin authentication for the protected HTTP surface.
//!
//! Issues and validates HS256-signed bearer tokens. The registration core
//! never inspects tokens; handlers receive an [`AdminUser`] carrying the
//! caller identity plus the already-verified "is an administrator" fact.

use crate::config::AuthConfig;
use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Caller identity (the admin username).
    pub sub: String,
    /// Whether the caller is an administrator.
    pub admin: bool,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present.
    #[error("missing bearer token")]
    MissingToken,
    /// The token did not validate (bad signature, expired, malformed).
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    /// The token validated but does not carry the admin claim.
    #[error("caller is not an administrator")]
    NotAdmin,
}

impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::MissingToken | Self::InvalidToken(_) => axum::http::StatusCode::UNAUTHORIZED,
            Self::NotAdmin => axum::http::StatusCode::FORBIDDEN,
        };
        (status, axum::Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Issue a signed admin token for the given caller.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] if signing fails.
pub fn issue_token(config: &AuthConfig, username: &str) -> Result<String, AuthError> {
    let claims = Claims {
        sub: username.to_owned(),
        admin: true,
        exp: (Utc::now() + Duration::hours(config.token_ttl_hours)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

/// Validate a bearer token and return its claims.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] on a bad signature, expired token,
/// or malformed input.
pub fn verify_token(config: &AuthConfig, token: &str) -> Result<Claims, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Verified administrator identity, extracted from the bearer token.
///
/// Use as a handler argument to protect a route:
///
/// ```ignore
/// async fn list_participants(admin: AdminUser, ...) -> ... { ... }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The admin's username, from the token's subject claim.
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AuthConfig: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let claims = verify_token(&config, token)?;
        if !claims.admin {
            return Err(AuthError::NotAdmin);
        }

        Ok(Self {
            username: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_owned(),
            token_ttl_hours: 1,
            admin_username: "admin".to_owned(),
            admin_password: "hunter2".to_owned(),
        }
    }

    #[test]
    fn issued_token_verifies_with_admin_claim() {
        let config = test_config();
        let token = issue_token(&config, "admin").unwrap();
        let claims = verify_token(&config, &token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.admin);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let config = test_config();
        let other = AuthConfig {
            jwt_secret: "other-secret".to_owned(),
            ..test_config()
        };
        let token = issue_token(&other, "admin").unwrap();
        assert!(matches!(
            verify_token(&config, &token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let config = test_config();
        assert!(matches!(
            verify_token(&config, "not.a.token"),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
