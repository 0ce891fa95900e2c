//! Participant repository: CRUD-style access keyed by national id.

use crate::error::{Error, Result};
use crate::types::{NewParticipant, Participant};
use sqlx::PgPool;

const PARTICIPANT_COLUMNS: &str = "id, cpf_ra AS national_id, curso_id AS course_id, \
     nome AS name, instituicao AS institution, pago AS paid";

/// Persistent storage for participant rows.
#[derive(Debug, Clone)]
pub struct ParticipantRepository {
    pool: PgPool,
}

impl ParticipantRepository {
    /// Create a new repository on the shared pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up a participant by national id. Absence is `Ok(None)`, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Repository`] if the query fails.
    pub async fn find_by_national_id(&self, national_id: i64) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participante WHERE cpf_ra = $1"
        ))
        .bind(national_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(participant)
    }

    /// Look up a participant by its system-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Repository`] if the query fails.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participante WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(participant)
    }

    /// List every participant. Admin-only at the HTTP boundary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Repository`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participante ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(participants)
    }

    /// Insert a new participant and return its generated identifier.
    ///
    /// The paid flag always starts false. Business-level duplicate checking
    /// happens in the orchestrator; this maps a storage-level unique
    /// violation (racing registrations) to [`Error::Constraint`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Constraint`] on a unique violation and
    /// [`Error::Repository`] on any other query failure.
    pub async fn insert(&self, participant: &NewParticipant) -> Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO participante (cpf_ra, curso_id, nome, instituicao, pago) \
             VALUES ($1, $2, $3, $4, FALSE) RETURNING id",
        )
        .bind(participant.national_id)
        .bind(participant.course_id)
        .bind(&participant.name)
        .bind(&participant.institution)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::Constraint(format!(
                    "national id {} already exists",
                    participant.national_id
                ))
            }
            _ => Error::Repository(e),
        })?;
        Ok(id)
    }

    /// Set the paid flag of a participant. Idempotent.
    ///
    /// Runs inside a scoped transaction that commits on success and rolls
    /// back on any execution error, leaving the flag unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no row has that identifier and
    /// [`Error::Repository`] if the update fails.
    pub async fn update_payment_flag(&self, id: i64, paid: bool) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE participante SET pago = $1 WHERE id = $2")
            .bind(paid)
            .bind(id)
            .execute(&mut *tx)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 1 => {
                tx.commit().await?;
                Ok(())
            }
            Ok(_) => {
                tx.rollback().await?;
                Err(Error::NotFound { participant_id: id })
            }
            Err(source) => {
                // Rollback failures resolve server-side when the connection
                // drops; the original execution error is the one to report.
                if let Err(rollback) = tx.rollback().await {
                    tracing::error!(participant_id = id, error = %rollback, "rollback failed");
                }
                Err(Error::Repository(source))
            }
        }
    }
}
