//! Router configuration.

use super::health::{health_check, readiness_check};
use super::state::AppState;
use crate::api;
use axum::routing::{get, post, put};
use axum::Router;

/// Build the complete router.
///
/// Public surface: catalog listings, registration, login and health checks.
/// The admin routes are guarded per-handler by the [`crate::auth::AdminUser`]
/// extractor rather than by a router-level layer.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/cursos", get(api::list_courses))
        .route("/minicursos", get(api::list_workshops))
        .route("/inscricao", post(api::create_registration))
        .route("/login", post(api::login))
        // Admin-only.
        .route("/admin/check", get(api::check))
        .route("/admin/participantes", get(api::list_participants))
        .route("/admin/participantes/:id/pagamento", put(api::set_payment));

    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .nest("/api", api_routes)
        .with_state(state)
}
