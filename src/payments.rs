//! Payment status updater.
//!
//! Toggles a participant's paid flag. No seat interaction; one row update.

use crate::error::{Error, Result};
use crate::storage::ParticipantRepository;

/// Marks and unmarks participant payments.
#[derive(Debug, Clone)]
pub struct PaymentService {
    participants: ParticipantRepository,
}

impl PaymentService {
    /// Create a new payment service.
    #[must_use]
    pub const fn new(participants: ParticipantRepository) -> Self {
        Self { participants }
    }

    /// Set a participant's paid flag. Idempotent: setting an already-set
    /// flag changes nothing observable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no participant has that identifier,
    /// or a repository error if the lookup or update fails.
    pub async fn set_paid(&self, participant_id: i64, paid: bool) -> Result<()> {
        if self.participants.find_by_id(participant_id).await?.is_none() {
            return Err(Error::NotFound { participant_id });
        }

        self.participants
            .update_payment_flag(participant_id, paid)
            .await?;
        tracing::info!(participant_id, paid, "payment flag updated");
        Ok(())
    }
}
