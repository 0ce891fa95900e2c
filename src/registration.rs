//! Registration orchestrator.
//!
//! Validates a registration request, rejects duplicates, inserts the
//! participant, and drives the enrollment transaction for each requested
//! workshop in order.

use crate::error::{Error, Result};
use crate::storage::{EnrollmentStore, ParticipantRepository};
use crate::types::{NewParticipant, RegistrationRequest};

/// Drives the registration write path end to end.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    participants: ParticipantRepository,
    enrollments: EnrollmentStore,
}

impl RegistrationService {
    /// Create a new orchestrator over the two repositories it coordinates.
    #[must_use]
    pub const fn new(participants: ParticipantRepository, enrollments: EnrollmentStore) -> Self {
        Self {
            participants,
            enrollments,
        }
    }

    /// Register a new participant and enroll them in the requested
    /// workshops.
    ///
    /// Steps:
    /// 1. Parse the national id; non-numeric input is a validation error.
    /// 2. Reject the request if the national id already has a participant
    ///    row (nothing is mutated).
    /// 3. Insert the participant; the course id defaults to 0 when no
    ///    course was selected.
    /// 4. Enroll each requested workshop sequentially in request order,
    ///    each inside its own atomic seat-reservation transaction.
    ///
    /// Processing stops at the first enrollment failure. Workshops enrolled
    /// before that point stay enrolled; there is no whole-registration
    /// rollback, so the caller must resubmit the remainder after fixing the
    /// cause. Returns the new participant's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`], [`Error::DuplicateRegistration`], or
    /// whatever the repositories and the enrollment transaction report.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<i64> {
        let national_id = parse_national_id(&request.national_id)?;

        if self
            .participants
            .find_by_national_id(national_id)
            .await?
            .is_some()
        {
            return Err(Error::DuplicateRegistration { national_id });
        }

        let course_id = request.course.as_ref().map_or(0, |course| course.id);
        let participant_id = self
            .participants
            .insert(&NewParticipant {
                national_id,
                course_id,
                name: request.name.clone(),
                institution: request.institution.clone(),
            })
            .await?;

        tracing::info!(participant_id, national_id, "participant registered");

        for selection in &request.workshops {
            self.enrollments.enroll(participant_id, selection.id).await?;
        }

        Ok(participant_id)
    }
}

/// Parse the string-form national id into the integer business key.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the value is not a plain decimal
/// integer.
pub fn parse_national_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| Error::Validation(format!("national id {raw:?} is not numeric")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn national_id_parses_plain_digits() {
        assert_eq!(parse_national_id("12345678901").unwrap(), 12_345_678_901);
    }

    #[test]
    fn national_id_rejects_non_numeric_input() {
        for raw in ["", "123.456", "123-45", "abc", "123 456"] {
            assert!(matches!(
                parse_national_id(raw),
                Err(Error::Validation(_))
            ));
        }
    }
}
