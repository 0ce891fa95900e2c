//! Event-registration backend.
//!
//! Lists courses and short workshops ("minicursos"), accepts participant
//! sign-ups, tracks remaining seats per workshop, and lets an administrator
//! mark payments.
//!
//! # Architecture
//!
//! ```text
//! HTTP request
//!     │
//!     ▼
//! api handlers ──► RegistrationService ──► ParticipantRepository
//!     │                    │
//!     │                    └─────────────► EnrollmentStore (atomic seat take)
//!     ├──► CatalogReader (read-only listings)
//!     └──► PaymentService (admin paid-flag toggles)
//! ```
//!
//! The seat-reservation write path is the one interesting part: enrolling a
//! participant inserts the enrollment row and conditionally decrements the
//! workshop's seat counter inside a single database transaction, verified by
//! affected-row count, so two racing enrollments for the last seat can never
//! both win. See [`storage::EnrollmentStore`].
//!
//! All state lives in `PostgreSQL`; the services hold nothing authoritative
//! in memory between requests.

#![forbid(unsafe_code)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod payments;
pub mod registration;
pub mod server;
pub mod storage;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use payments::PaymentService;
pub use registration::RegistrationService;
pub use server::{AppState, build_router};
pub use storage::{CatalogReader, EnrollmentStore, ParticipantRepository};
pub use types::{
    Course, NewParticipant, Participant, RegistrationRequest, TimeWindow, Workshop,
};
