//! Registration endpoint.
//!
//! - `POST /api/inscricao` - register a participant and enroll them in the
//!   requested workshops

use super::error::ApiError;
use crate::server::state::AppState;
use crate::types::RegistrationRequest;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

/// Register a new participant.
///
/// Responds 201 with no body on success. A duplicate national id is 409; a
/// malformed national id is 400; a full workshop is 422. Workshops enrolled
/// before a mid-list failure stay enrolled.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> Result<StatusCode, ApiError> {
    state.registration.register(&request).await?;
    Ok(StatusCode::CREATED)
}
