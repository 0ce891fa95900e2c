//! Read-only catalog queries for courses and workshops.

use crate::error::Result;
use crate::types::{Course, TimeWindow, Workshop};
use sqlx::PgPool;

const WORKSHOP_COLUMNS: &str = "id, nome AS name, palestrante AS speaker, \
     horario_comeco AS starts_at, horario_fim AS ends_at, vagas AS seats_total, \
     vagas_restantes AS seats_remaining, quantidade_horas AS duration_hours";

/// Read-only access to the course and workshop catalog.
#[derive(Debug, Clone)]
pub struct CatalogReader {
    pool: PgPool,
}

impl CatalogReader {
    /// Create a new catalog reader on the shared pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every course, unfiltered.
    ///
    /// Returns an empty vector when the catalog is empty; a query failure is
    /// an error, never an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Repository`] if the query fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>("SELECT id, nome AS name FROM curso ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(courses)
    }

    /// List workshops that still have seats, optionally restricted to a time
    /// window.
    ///
    /// With a window, only workshops entirely inside it match:
    /// `starts_at > window.start AND ends_at < window.end`. Note the listing
    /// is a snapshot; seat availability is only authoritative inside the
    /// enrollment transaction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Repository`] if the query fails.
    pub async fn list_workshops(&self, window: Option<TimeWindow>) -> Result<Vec<Workshop>> {
        let workshops = match window {
            Some(window) => {
                sqlx::query_as::<_, Workshop>(&format!(
                    "SELECT {WORKSHOP_COLUMNS} FROM minicurso \
                     WHERE vagas_restantes > 0 \
                       AND horario_comeco > $1 AND horario_fim < $2 \
                     ORDER BY horario_comeco"
                ))
                .bind(window.start)
                .bind(window.end)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Workshop>(&format!(
                    "SELECT {WORKSHOP_COLUMNS} FROM minicurso \
                     WHERE vagas_restantes > 0 ORDER BY horario_comeco"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(workshops)
    }
}
