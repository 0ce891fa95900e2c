//! Admin participant endpoints.
//!
//! - `GET /api/admin/participantes` - list every participant
//! - `PUT /api/admin/participantes/:id/pagamento` - set the paid flag
//! - `GET /api/admin/check` - validate the caller's admin token
//!
//! All of these require a verified [`AdminUser`].

use super::error::ApiError;
use crate::auth::AdminUser;
use crate::server::state::AppState;
use crate::types::Participant;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

/// Body of the payment toggle request.
#[derive(Debug, Deserialize)]
pub struct PaymentUpdate {
    /// Desired paid flag.
    pub pago: bool,
}

/// List every participant.
pub async fn list_participants(
    admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Participant>>, ApiError> {
    tracing::debug!(admin = %admin.username, "listing participants");
    let participants = state.participants.list().await?;
    Ok(Json(participants))
}

/// Set a participant's paid flag. Idempotent; 404 for an unknown id.
pub async fn set_payment(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<PaymentUpdate>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(admin = %admin.username, participant_id = id, paid = update.pago, "payment toggle");
    state.payments.set_paid(id, update.pago).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Confirm the caller holds a valid admin token.
pub async fn check(admin: AdminUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "msg": "Ok", "admin": admin.username }))
}
