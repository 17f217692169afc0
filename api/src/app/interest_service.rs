//! Interest service
//!
//! Public capture of travelling-team interest in an event, plus the
//! admin actions: listing demand per event and converting an interest
//! into a confirmed registration.

use std::sync::Arc;

use rand::Rng;

use crate::domain::entities::{ApprovalStatus, InterestId, InterestRecord, NewInterest};
use crate::domain::ports::{EventRepository, InterestRepository};
use crate::error::{AppError, DomainError};

/// Service for interest capture and conversion
pub struct InterestService<IR, ER>
where
    IR: InterestRepository,
    ER: EventRepository,
{
    interests: Arc<IR>,
    events: Arc<ER>,
}

impl<IR, ER> InterestService<IR, ER>
where
    IR: InterestRepository,
    ER: EventRepository,
{
    pub fn new(interests: Arc<IR>, events: Arc<ER>) -> Self {
        Self { interests, events }
    }

    /// Record interest from a travelling team. The event must exist and
    /// be approved; the participant estimate must be positive.
    pub async fn register(&self, interest: NewInterest) -> Result<InterestRecord, AppError> {
        if interest.club_name.trim().is_empty() {
            return Err(DomainError::Validation("Club name must not be empty".to_string()).into());
        }
        if !interest.contact_email.contains('@') {
            return Err(DomainError::Validation(format!(
                "Invalid contact email: {}",
                interest.contact_email
            ))
            .into());
        }
        if interest.expected_participants <= 0 {
            return Err(DomainError::Validation(
                "Expected participants must be positive".to_string(),
            )
            .into());
        }

        let event = self
            .events
            .find_by_id(&interest.event_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Event {} not found", interest.event_id))
            })?;
        if event.status != ApprovalStatus::Approved {
            return Err(DomainError::Validation(format!(
                "Event '{}' is not open for interest",
                event.title
            ))
            .into());
        }

        let reference_code = generate_reference_code();
        Ok(self.interests.create(&interest, &reference_code).await?)
    }

    /// Interest records for one event, oldest first
    pub async fn list_for_event(
        &self,
        event_id: &crate::domain::entities::EventId,
    ) -> Result<Vec<InterestRecord>, AppError> {
        Ok(self.interests.find_by_event(event_id).await?)
    }

    /// Mark an interest record as converted into a registration
    pub async fn convert(&self, id: &InterestId) -> Result<InterestRecord, AppError> {
        let record = self
            .interests
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Interest record {} not found", id)))?;

        if record.converted {
            return Err(DomainError::Conflict(format!(
                "Interest record {} is already converted",
                id
            ))
            .into());
        }

        self.interests.mark_converted(id).await?;

        Ok(InterestRecord {
            converted: true,
            ..record
        })
    }
}

/// Short uppercase code quoted back to the submitter
fn generate_reference_code() -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
    let mut rng = rand::thread_rng();
    (0..8)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
