//! Event service
//!
//! Event submission, the admin listing with clash annotations, and the
//! approve/reject decision flow. Approval and rejection are one-way:
//! once decided, an event does not come back to pending.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::app::scheduling::{detect_clashes, ClashGroup};
use crate::domain::entities::{ApprovalStatus, Event, EventId, NewEvent};
use crate::domain::ports::{ClubRepository, EventRepository, Mailer, OutboundEmail};
use crate::error::{AppError, DomainError};

/// Filters applied to the admin event listing
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub status: Option<ApprovalStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Keep only events that are part of a clash group
    pub clashes_only: bool,
}

/// The admin listing: filtered events plus the clash groups among them
#[derive(Debug, Clone)]
pub struct EventListing {
    pub events: Vec<Event>,
    pub clashes: Vec<ClashGroup>,
}

/// Service for event submission and review
pub struct EventService<ER, CR, M>
where
    ER: EventRepository,
    CR: ClubRepository,
    M: Mailer,
{
    events: Arc<ER>,
    clubs: Arc<CR>,
    mailer: Arc<M>,
}

impl<ER, CR, M> EventService<ER, CR, M>
where
    ER: EventRepository,
    CR: ClubRepository,
    M: Mailer,
{
    pub fn new(events: Arc<ER>, clubs: Arc<CR>, mailer: Arc<M>) -> Self {
        Self {
            events,
            clubs,
            mailer,
        }
    }

    /// Submit a new event for review. The event starts pending.
    pub async fn submit(&self, event: NewEvent) -> Result<Event, AppError> {
        if event.title.trim().is_empty() {
            return Err(DomainError::Validation("Event title must not be empty".to_string()).into());
        }
        if event.location.trim().is_empty() {
            return Err(
                DomainError::Validation("Event location must not be empty".to_string()).into(),
            );
        }

        if let Some(club_id) = &event.host_club_id {
            let club = self
                .clubs
                .find_by_id(club_id)
                .await?
                .ok_or_else(|| DomainError::NotFound(format!("Club {} not found", club_id)))?;
            if !club.is_active() {
                return Err(DomainError::Validation(format!(
                    "Club {} is not approved to host events",
                    club.name
                ))
                .into());
            }
        }

        Ok(self.events.create(&event).await?)
    }

    pub async fn get(&self, id: &EventId) -> Result<Option<Event>, AppError> {
        Ok(self.events.find_by_id(id).await?)
    }

    /// Build the admin listing: filter, detect clashes, sort by date.
    ///
    /// Clashes are detected over the status/date-filtered set, so the
    /// clash toggle reflects exactly what the administrator is looking
    /// at. Undated events sort after dated ones.
    pub async fn list(&self, filter: &EventFilter, limit: i64) -> Result<EventListing, AppError> {
        let all = self.events.find_all(limit, 0).await?;

        let mut events: Vec<Event> = all
            .into_iter()
            .filter(|e| filter.status.map(|s| e.status == s).unwrap_or(true))
            .filter(|e| e.falls_within(filter.from, filter.to))
            .collect();

        let clashes = detect_clashes(&events);

        if filter.clashes_only {
            events.retain(|e| clashes.iter().any(|g| g.contains(&e.id)));
        }

        events.sort_by_key(|e| (e.start_date.is_none(), e.start_date));

        Ok(EventListing { events, clashes })
    }

    /// Approve a pending event
    pub async fn approve(&self, id: &EventId) -> Result<Event, AppError> {
        let mut event = self.load_pending(id).await?;

        self.events
            .update_status(id, ApprovalStatus::Approved, None)
            .await?;

        event.status = ApprovalStatus::Approved;
        event.rejection_reason = None;

        self.notify_host(
            &event,
            format!("Your event '{}' has been approved", event.title),
            format!(
                "Good news - '{}' has been approved and is now visible to travelling teams.",
                event.title
            ),
        )
        .await;

        Ok(event)
    }

    /// Reject a pending event. The reason must be non-blank and is
    /// stored verbatim; validation happens before any write.
    pub async fn reject(&self, id: &EventId, reason: &str) -> Result<Event, AppError> {
        if reason.trim().is_empty() {
            return Err(
                DomainError::Validation("Rejection reason must not be empty".to_string()).into(),
            );
        }

        let mut event = self.load_pending(id).await?;

        self.events
            .update_status(id, ApprovalStatus::Rejected, Some(reason))
            .await?;

        event.status = ApprovalStatus::Rejected;
        event.rejection_reason = Some(reason.to_string());

        self.notify_host(
            &event,
            format!("Your event '{}' was not approved", event.title),
            format!(
                "'{}' was not approved. Reason given: {}",
                event.title, reason
            ),
        )
        .await;

        Ok(event)
    }

    async fn load_pending(&self, id: &EventId) -> Result<Event, AppError> {
        let event = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Event {} not found", id)))?;

        if event.status.is_terminal() {
            return Err(DomainError::Conflict(format!(
                "Event {} is already {}",
                id, event.status
            ))
            .into());
        }

        Ok(event)
    }

    /// Notify the hosting club of a decision. Dispatch failure is logged
    /// and never fails the decision itself.
    async fn notify_host(&self, event: &Event, subject: String, body: String) {
        let Some(club_id) = &event.host_club_id else {
            return;
        };

        let club = match self.clubs.find_by_id(club_id).await {
            Ok(Some(club)) => club,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, club_id = %club_id, "Failed to load host club for notification");
                return;
            }
        };

        let email = OutboundEmail {
            to: club.contact_email.clone(),
            subject,
            body,
        };

        if let Err(e) = self.mailer.send(&email).await {
            tracing::warn!(error = %e, to = %email.to, "Failed to send decision notification");
        }
    }
}
