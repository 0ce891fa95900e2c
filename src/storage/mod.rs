//! Storage access for the registration backend.
//!
//! Everything here talks to `PostgreSQL` through a shared `sqlx` pool with
//! prepared statements. Repositories are constructed once at startup and
//! injected into the services that need them; nothing holds authoritative
//! in-memory copies of rows across requests.
//!
//! - [`CatalogReader`]: read-only course and workshop listings
//! - [`ParticipantRepository`]: participant rows keyed by national id
//! - [`EnrollmentStore`]: the atomic seat-reservation transaction

pub mod catalog;
pub mod enrollments;
pub mod participants;

pub use catalog::CatalogReader;
pub use enrollments::EnrollmentStore;
pub use participants::ParticipantRepository;

use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Build the shared connection pool from configuration.
///
/// # Errors
///
/// Returns an error if the pool cannot be created or the database is
/// unreachable.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await?;
    Ok(pool)
}

/// Run the embedded migrations against the given pool.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(sqlx::Error::from)?;
    Ok(())
}
