//! Club domain entity
//!
//! Represents a GAA club registered on the platform, either as a host
//! or as a travelling club. New registrations await administrator review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClubId(pub Uuid);

impl ClubId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClubId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ClubId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClubId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review status of a club registration
///
/// Mirrors the event approval lifecycle but is a distinct type so the
/// two state machines cannot be mixed up at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClubStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClubStatus::Approved | ClubStatus::Rejected)
    }
}

impl std::fmt::Display for ClubStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClubStatus::Pending => write!(f, "pending"),
            ClubStatus::Approved => write!(f, "approved"),
            ClubStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ClubStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ClubStatus::Pending),
            "approved" => Ok(ClubStatus::Approved),
            "rejected" => Ok(ClubStatus::Rejected),
            _ => Err(format!("Unknown club status: {}", s)),
        }
    }
}

/// A GAA club registered on the platform
#[derive(Debug, Clone, Serialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub country: String,
    pub county: Option<String>,
    pub contact_email: String,
    pub status: ClubStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Club {
    /// Only approved clubs may host events or be matched against
    pub fn is_active(&self) -> bool {
        self.status == ClubStatus::Approved
    }
}

/// Data needed to register a new club
#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub country: String,
    pub county: Option<String>,
    pub contact_email: String,
}
