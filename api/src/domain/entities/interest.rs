//! Interest record domain entity
//!
//! An expression of intent by a prospective travelling team to attend an
//! event. May later convert into a confirmed registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::EventId;

/// Unique identifier for an interest record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterestId(pub Uuid);

impl InterestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InterestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for InterestId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InterestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A travelling team's expression of interest in an event
#[derive(Debug, Clone, Serialize)]
pub struct InterestRecord {
    pub id: InterestId,
    pub event_id: EventId,
    /// Free-text club name as entered by the submitter
    pub club_name: String,
    pub contact_email: String,
    /// How many travelling participants the team expects to bring
    pub expected_participants: i32,
    /// Whether this interest became a confirmed registration
    pub converted: bool,
    /// Short code quoted back to the submitter
    pub reference_code: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to record a new interest
#[derive(Debug, Clone)]
pub struct NewInterest {
    pub event_id: EventId,
    pub club_name: String,
    pub contact_email: String,
    pub expected_participants: i32,
}
