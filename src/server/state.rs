//! Application state shared across HTTP handlers.

use crate::config::AuthConfig;
use crate::payments::PaymentService;
use crate::registration::RegistrationService;
use crate::storage::{CatalogReader, EnrollmentStore, ParticipantRepository};
use axum::extract::FromRef;
use sqlx::PgPool;

/// Shared resources handed to every HTTP handler.
///
/// Constructed once at startup; cloning is cheap because each service only
/// holds a handle to the shared connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Shared connection pool, kept for readiness pings.
    pub pool: PgPool,
    /// Course and workshop listings.
    pub catalog: CatalogReader,
    /// Participant rows (admin listing goes through this directly).
    pub participants: ParticipantRepository,
    /// Registration orchestrator.
    pub registration: RegistrationService,
    /// Payment status updater.
    pub payments: PaymentService,
    /// Admin authentication settings.
    pub auth: AuthConfig,
}

impl AppState {
    /// Wire up every service over the shared pool.
    #[must_use]
    pub fn new(pool: PgPool, auth: AuthConfig) -> Self {
        let catalog = CatalogReader::new(pool.clone());
        let participants = ParticipantRepository::new(pool.clone());
        let enrollments = EnrollmentStore::new(pool.clone());
        let registration = RegistrationService::new(participants.clone(), enrollments);
        let payments = PaymentService::new(participants.clone());

        Self {
            pool,
            catalog,
            participants,
            registration,
            payments,
            auth,
        }
    }
}

// Lets the AdminUser extractor pull the auth settings out of the state.
impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
