//! Event domain entity
//!
//! Represents a hosted tournament or travel event submitted by a club
//! and reviewed by platform administrators.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::club::ClubId;

/// Unique identifier for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EventId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Awaiting administrator review
    Pending,
    /// Approved and visible to travelling teams
    Approved,
    /// Rejected with a reason
    Rejected,
}

impl ApprovalStatus {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApprovalStatus::Approved | ApprovalStatus::Rejected)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Unknown approval status: {}", s)),
        }
    }
}

/// Competition category an event accepts entries for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MensFootball,
    LadiesFootball,
    Hurling,
    Camogie,
    Youth,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::MensFootball => write!(f, "mens_football"),
            Category::LadiesFootball => write!(f, "ladies_football"),
            Category::Hurling => write!(f, "hurling"),
            Category::Camogie => write!(f, "camogie"),
            Category::Youth => write!(f, "youth"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mens_football" => Ok(Category::MensFootball),
            "ladies_football" => Ok(Category::LadiesFootball),
            "hurling" => Ok(Category::Hurling),
            "camogie" => Ok(Category::Camogie),
            "youth" => Ok(Category::Youth),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// A hosted tournament or travel event
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Calendar date of the event; time of day is not modeled.
    /// None when the submission carried no usable date.
    pub start_date: Option<NaiveDate>,
    pub status: ApprovalStatus,
    /// Present when status is Rejected
    pub rejection_reason: Option<String>,
    /// Hosting club, if the event has one
    pub host_club_id: Option<ClubId>,
    pub location: String,
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }

    /// Whether the event falls inside an inclusive date range.
    /// Undated events never match a range filter.
    pub fn falls_within(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        match self.start_date {
            Some(date) => {
                from.map(|f| date >= f).unwrap_or(true) && to.map(|t| date <= t).unwrap_or(true)
            }
            None => from.is_none() && to.is_none(),
        }
    }
}

/// Data needed to submit a new event
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub host_club_id: Option<ClubId>,
    pub location: String,
    pub categories: Vec<Category>,
}
