//! Error types for the event-registration backend.
//!
//! One closed enumeration covers every failure the core can report, so
//! callers branch on kind instead of matching error strings. Repository
//! errors propagate unchanged to the orchestrator; the HTTP layer translates
//! kinds into statuses without leaking storage detail.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure kind the registration core can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input, e.g. a non-numeric national id.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The national id already has a participant row.
    #[error("national id {national_id} is already registered")]
    DuplicateRegistration {
        /// The national id that was already taken.
        national_id: i64,
    },

    /// A lookup by identifier found nothing.
    #[error("participant {participant_id} not found")]
    NotFound {
        /// The identifier that matched no row.
        participant_id: i64,
    },

    /// The storage engine rejected a write, e.g. a duplicate key.
    #[error("storage constraint violated: {0}")]
    Constraint(String),

    /// Underlying storage query or execution failure.
    #[error("storage error: {0}")]
    Repository(#[from] sqlx::Error),

    /// The seat-reservation transaction could not complete; either the
    /// workshop is full or the enrollment insert was rejected. Nothing was
    /// persisted.
    #[error("enrollment in workshop {workshop_id} failed")]
    EnrollmentFailed {
        /// The workshop the enrollment targeted.
        workshop_id: i32,
    },

    /// Undoing a failed enrollment itself failed. The database resolves the
    /// aborted transaction on its own, but this must be surfaced loudly
    /// rather than folded into a generic failure.
    #[error("could not roll back failed enrollment in workshop {workshop_id}: {source}")]
    CompensationFailed {
        /// The workshop the enrollment targeted.
        workshop_id: i32,
        /// The rollback failure reported by the driver.
        source: sqlx::Error,
    },
}
