//! HTTP API handlers, organized by concern:
//!
//! - Catalog: course and workshop listings
//! - Registrations: participant sign-up
//! - Participants: admin listing and payment toggles
//! - Auth: admin login
//! - Error: domain-to-HTTP status mapping

pub mod auth;
pub mod catalog;
pub mod error;
pub mod participants;
pub mod registrations;

pub use auth::login;
pub use catalog::{list_courses, list_workshops};
pub use error::ApiError;
pub use participants::{check, list_participants, set_payment};
pub use registrations::create_registration;
