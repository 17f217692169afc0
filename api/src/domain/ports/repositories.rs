//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    ApprovalStatus, Club, ClubId, ClubStatus, DayPassRate, Event, EventId, InterestId,
    InterestRecord, NewClub, NewDayPassRate, NewEvent, NewInterest,
};
use crate::error::DomainError;

/// Repository for Event entities
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find an event by ID
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// Find all events, newest submission first
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Event>, DomainError>;

    /// Create a new event in Pending status
    async fn create(&self, event: &NewEvent) -> Result<Event, DomainError>;

    /// Update approval status; rejection carries the reason verbatim
    async fn update_status(
        &self,
        id: &EventId,
        status: ApprovalStatus,
        rejection_reason: Option<&str>,
    ) -> Result<(), DomainError>;

    /// Count events in a given status
    async fn count_by_status(&self, status: ApprovalStatus) -> Result<i64, DomainError>;
}

/// Repository for Club entities
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Find a club by ID
    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError>;

    /// Find a club by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Club>, DomainError>;

    /// Find all clubs, newest registration first
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Club>, DomainError>;

    /// Find approved clubs, optionally restricted to a country
    async fn find_approved(&self, country: Option<&str>) -> Result<Vec<Club>, DomainError>;

    /// Create a new club in Pending status
    async fn create(&self, club: &NewClub) -> Result<Club, DomainError>;

    /// Update registration status; rejection carries the reason verbatim
    async fn update_status(
        &self,
        id: &ClubId,
        status: ClubStatus,
        rejection_reason: Option<&str>,
    ) -> Result<(), DomainError>;

    /// Count clubs in a given status
    async fn count_by_status(&self, status: ClubStatus) -> Result<i64, DomainError>;
}

/// Repository for InterestRecord entities
#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// Find an interest record by ID
    async fn find_by_id(&self, id: &InterestId) -> Result<Option<InterestRecord>, DomainError>;

    /// Find interest records for an event
    async fn find_by_event(&self, event_id: &EventId) -> Result<Vec<InterestRecord>, DomainError>;

    /// Find all interest records
    async fn find_all(&self) -> Result<Vec<InterestRecord>, DomainError>;

    /// Create a new interest record (unconverted)
    async fn create(
        &self,
        interest: &NewInterest,
        reference_code: &str,
    ) -> Result<InterestRecord, DomainError>;

    /// Mark an interest record as converted into a registration
    async fn mark_converted(&self, id: &InterestId) -> Result<(), DomainError>;
}

/// Repository for DayPassRate entities
#[async_trait]
pub trait DayPassRateRepository: Send + Sync {
    /// Find the configured rate for a club
    async fn find_by_club(&self, club_id: &ClubId) -> Result<Option<DayPassRate>, DomainError>;

    /// Set (insert or overwrite) a club's rate
    async fn upsert(&self, rate: &NewDayPassRate) -> Result<DayPassRate, DomainError>;
}
