//! The enrollment transaction: atomic "enroll participant, take one seat".
//!
//! The legacy system did this as two independent auto-committed statements
//! with a compensating delete, which could oversell a workshop when two
//! enrollments raced for the last seat. Here both statements run inside one
//! database transaction and the seat decrement is conditional on seats
//! remaining, verified through the affected-row count. Concurrent
//! enrollments serialize on the workshop row lock, so exactly one wins the
//! last seat and the counter can never go negative.

use crate::error::{Error, Result};
use sqlx::{PgPool, Postgres, Transaction};

/// Executes the seat-reservation write path.
#[derive(Debug, Clone)]
pub struct EnrollmentStore {
    pool: PgPool,
}

impl EnrollmentStore {
    /// Create a new enrollment store on the shared pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Enroll a participant in a workshop and decrement its seat counter,
    /// atomically.
    ///
    /// Protocol, all inside one transaction:
    /// 1. Insert the (participant, workshop) enrollment row.
    /// 2. Conditionally decrement `vagas_restantes`, guarded by
    ///    `vagas_restantes > 0`.
    /// 3. Commit only if the decrement affected exactly one row; otherwise
    ///    the workshop is full and everything rolls back.
    ///
    /// On failure neither the enrollment row nor the counter is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EnrollmentFailed`] when the workshop has no seats
    /// left or the enrollment insert is rejected (unknown workshop,
    /// duplicate enrollment), [`Error::CompensationFailed`] when undoing a
    /// failed attempt itself errors, and [`Error::Repository`] when the
    /// transaction cannot be started or committed.
    pub async fn enroll(&self, participant_id: i64, workshop_id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO participante_minicurso (participante_id, minicurso_id) VALUES ($1, $2)",
        )
        .bind(participant_id)
        .bind(workshop_id)
        .execute(&mut *tx)
        .await;

        if let Err(source) = inserted {
            tracing::warn!(
                participant_id,
                workshop_id,
                error = %source,
                "enrollment insert rejected"
            );
            return Err(Self::abort(tx, workshop_id).await);
        }

        let updated = sqlx::query(
            "UPDATE minicurso SET vagas_restantes = vagas_restantes - 1 \
             WHERE id = $1 AND vagas_restantes > 0",
        )
        .bind(workshop_id)
        .execute(&mut *tx)
        .await;

        match updated {
            Ok(done) if done.rows_affected() == 1 => {
                tx.commit().await?;
                tracing::info!(participant_id, workshop_id, "enrolled, one seat taken");
                Ok(())
            }
            Ok(_) => {
                tracing::warn!(participant_id, workshop_id, "workshop full, rolling back");
                Err(Self::abort(tx, workshop_id).await)
            }
            Err(source) => {
                tracing::warn!(
                    participant_id,
                    workshop_id,
                    error = %source,
                    "seat decrement failed, rolling back"
                );
                Err(Self::abort(tx, workshop_id).await)
            }
        }
    }

    /// Roll the enrollment transaction back.
    ///
    /// A rollback that itself fails is reported as the distinct
    /// [`Error::CompensationFailed`] kind and logged at error level; it is
    /// state the service cannot verify it undid.
    async fn abort(tx: Transaction<'_, Postgres>, workshop_id: i32) -> Error {
        match tx.rollback().await {
            Ok(()) => Error::EnrollmentFailed { workshop_id },
            Err(source) => {
                tracing::error!(
                    workshop_id,
                    error = %source,
                    "failed to roll back enrollment transaction"
                );
                Error::CompensationFailed {
                    workshop_id,
                    source,
                }
            }
        }
    }
}
