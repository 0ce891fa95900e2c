//! Admin login endpoint.
//!
//! - `POST /api/login` - exchange admin credentials for a signed token

use super::error::ApiError;
use crate::auth::issue_token;
use crate::server::state::AppState;
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Signed bearer token for the admin routes.
    pub token: String,
}

/// Exchange admin credentials for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let auth = &state.auth;
    if request.username != auth.admin_username || request.password != auth.admin_password {
        tracing::warn!(username = %request.username, "rejected login attempt");
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    let token = issue_token(auth, &request.username).map_err(|e| {
        tracing::error!(error = %e, "failed to sign admin token");
        ApiError::new(
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "internal error".to_owned(),
            "INTERNAL",
        )
    })?;
    Ok(Json(TokenResponse { token }))
}
