//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    ApprovalStatus, Club, ClubId, ClubStatus, DayPassRate, Event, EventId, InterestId,
    InterestRecord, NewClub, NewDayPassRate, NewEvent, NewInterest,
};
use crate::domain::ports::{
    ClubRepository, DayPassRateRepository, EventRepository, InterestRepository, Mailer,
    OutboundEmail,
};
use crate::error::{DomainError, MailError};

// ============================================================================
// In-Memory Event Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<EventId, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an event for testing
    pub fn with_event(self, event: Event) -> Self {
        {
            let mut events = self.events.write().unwrap();
            events.insert(event.id, event);
        }
        self
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let events = self.events.read().unwrap();
        Ok(events.get(id).cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Event>, DomainError> {
        let events = self.events.read().unwrap();
        let mut all: Vec<_> = events.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn create(&self, new_event: &NewEvent) -> Result<Event, DomainError> {
        let event = Event {
            id: EventId::new(),
            title: new_event.title.clone(),
            start_date: new_event.start_date,
            status: ApprovalStatus::Pending,
            rejection_reason: None,
            host_club_id: new_event.host_club_id,
            location: new_event.location.clone(),
            categories: new_event.categories.clone(),
            created_at: Utc::now(),
        };

        let mut events = self.events.write().unwrap();
        events.insert(event.id, event.clone());

        Ok(event)
    }

    async fn update_status(
        &self,
        id: &EventId,
        status: ApprovalStatus,
        rejection_reason: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut events = self.events.write().unwrap();
        if let Some(event) = events.get_mut(id) {
            event.status = status;
            event.rejection_reason = rejection_reason.map(|r| r.to_string());
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("Event {} not found", id)))
        }
    }

    async fn count_by_status(&self, status: ApprovalStatus) -> Result<i64, DomainError> {
        let events = self.events.read().unwrap();
        Ok(events.values().filter(|e| e.status == status).count() as i64)
    }
}

// ============================================================================
// In-Memory Club Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryClubRepository {
    clubs: Arc<RwLock<HashMap<ClubId, Club>>>,
}

impl InMemoryClubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a club for testing
    pub fn with_club(self, club: Club) -> Self {
        {
            let mut clubs = self.clubs.write().unwrap();
            clubs.insert(club.id, club);
        }
        self
    }
}

#[async_trait]
impl ClubRepository for InMemoryClubRepository {
    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        let clubs = self.clubs.read().unwrap();
        Ok(clubs.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Club>, DomainError> {
        let clubs = self.clubs.read().unwrap();
        Ok(clubs.values().find(|c| c.name == name).cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Club>, DomainError> {
        let clubs = self.clubs.read().unwrap();
        let mut all: Vec<_> = clubs.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_approved(&self, country: Option<&str>) -> Result<Vec<Club>, DomainError> {
        let clubs = self.clubs.read().unwrap();
        Ok(clubs
            .values()
            .filter(|c| c.status == ClubStatus::Approved)
            .filter(|c| country.map(|co| c.country == co).unwrap_or(true))
            .cloned()
            .collect())
    }

    async fn create(&self, new_club: &NewClub) -> Result<Club, DomainError> {
        let club = Club {
            id: ClubId::new(),
            name: new_club.name.clone(),
            country: new_club.country.clone(),
            county: new_club.county.clone(),
            contact_email: new_club.contact_email.clone(),
            status: ClubStatus::Pending,
            rejection_reason: None,
            created_at: Utc::now(),
        };

        let mut clubs = self.clubs.write().unwrap();
        clubs.insert(club.id, club.clone());

        Ok(club)
    }

    async fn update_status(
        &self,
        id: &ClubId,
        status: ClubStatus,
        rejection_reason: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut clubs = self.clubs.write().unwrap();
        if let Some(club) = clubs.get_mut(id) {
            club.status = status;
            club.rejection_reason = rejection_reason.map(|r| r.to_string());
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("Club {} not found", id)))
        }
    }

    async fn count_by_status(&self, status: ClubStatus) -> Result<i64, DomainError> {
        let clubs = self.clubs.read().unwrap();
        Ok(clubs.values().filter(|c| c.status == status).count() as i64)
    }
}

// ============================================================================
// In-Memory Interest Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryInterestRepository {
    interests: Arc<RwLock<HashMap<InterestId, InterestRecord>>>,
}

impl InMemoryInterestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an interest record for testing
    pub fn with_interest(self, interest: InterestRecord) -> Self {
        {
            let mut interests = self.interests.write().unwrap();
            interests.insert(interest.id, interest);
        }
        self
    }
}

#[async_trait]
impl InterestRepository for InMemoryInterestRepository {
    async fn find_by_id(&self, id: &InterestId) -> Result<Option<InterestRecord>, DomainError> {
        let interests = self.interests.read().unwrap();
        Ok(interests.get(id).cloned())
    }

    async fn find_by_event(&self, event_id: &EventId) -> Result<Vec<InterestRecord>, DomainError> {
        let interests = self.interests.read().unwrap();
        let mut records: Vec<_> = interests
            .values()
            .filter(|i| &i.event_id == event_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(records)
    }

    async fn find_all(&self) -> Result<Vec<InterestRecord>, DomainError> {
        let interests = self.interests.read().unwrap();
        let mut records: Vec<_> = interests.values().cloned().collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(records)
    }

    async fn create(
        &self,
        new_interest: &NewInterest,
        reference_code: &str,
    ) -> Result<InterestRecord, DomainError> {
        let record = InterestRecord {
            id: InterestId::new(),
            event_id: new_interest.event_id,
            club_name: new_interest.club_name.clone(),
            contact_email: new_interest.contact_email.clone(),
            expected_participants: new_interest.expected_participants,
            converted: false,
            reference_code: reference_code.to_string(),
            created_at: Utc::now(),
        };

        let mut interests = self.interests.write().unwrap();
        interests.insert(record.id, record.clone());

        Ok(record)
    }

    async fn mark_converted(&self, id: &InterestId) -> Result<(), DomainError> {
        let mut interests = self.interests.write().unwrap();
        if let Some(record) = interests.get_mut(id) {
            record.converted = true;
            Ok(())
        } else {
            Err(DomainError::NotFound(format!(
                "Interest record {} not found",
                id
            )))
        }
    }
}

// ============================================================================
// In-Memory Day Pass Rate Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryDayPassRateRepository {
    rates: Arc<RwLock<HashMap<ClubId, DayPassRate>>>,
}

impl InMemoryDayPassRateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DayPassRateRepository for InMemoryDayPassRateRepository {
    async fn find_by_club(&self, club_id: &ClubId) -> Result<Option<DayPassRate>, DomainError> {
        let rates = self.rates.read().unwrap();
        Ok(rates.get(club_id).cloned())
    }

    async fn upsert(&self, new_rate: &NewDayPassRate) -> Result<DayPassRate, DomainError> {
        let rate = DayPassRate {
            club_id: new_rate.club_id,
            price_per_participant: new_rate.price_per_participant,
            updated_at: Utc::now(),
        };

        let mut rates = self.rates.write().unwrap();
        rates.insert(rate.club_id, rate.clone());

        Ok(rate)
    }
}

// ============================================================================
// Recording Mailer
// ============================================================================

/// Mailer that records every message instead of sending it
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<RwLock<Vec<OutboundEmail>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, in order
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent.write().unwrap().push(email.clone());
        Ok(())
    }
}
