//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{
    ApprovalStatus, Category, Club, ClubId, ClubStatus, Event, EventId, InterestId, InterestRecord,
};

/// Create a pending test event with default values
pub fn test_event() -> Event {
    Event {
        id: EventId::new(),
        title: "Benelux Championships".to_string(),
        start_date: "2025-06-01".parse().ok(),
        status: ApprovalStatus::Pending,
        rejection_reason: None,
        host_club_id: None,
        location: "The Hague, Netherlands".to_string(),
        categories: vec![Category::MensFootball, Category::Camogie],
        created_at: Utc::now(),
    }
}

/// Create a test event on a specific date with a specific status
pub fn test_event_on(date: &str, status: ApprovalStatus) -> Event {
    Event {
        id: EventId::new(),
        title: format!("{} Event {}", status, date),
        start_date: date.parse().ok(),
        status,
        rejection_reason: None,
        host_club_id: None,
        location: "Somewhere Abroad".to_string(),
        categories: vec![Category::Hurling],
        created_at: Utc::now(),
    }
}

/// Create an approved test event
pub fn test_approved_event() -> Event {
    Event {
        status: ApprovalStatus::Approved,
        ..test_event()
    }
}

/// Create an approved test club with a specific name
pub fn test_club_named(name: &str) -> Club {
    Club {
        id: ClubId::new(),
        name: name.to_string(),
        country: "Germany".to_string(),
        county: None,
        contact_email: format!(
            "secretary@{}.test",
            name.to_lowercase().replace(' ', "-")
        ),
        status: ClubStatus::Approved,
        rejection_reason: None,
        created_at: Utc::now(),
    }
}

/// Create a test club with a specific status
pub fn test_club_with_status(status: ClubStatus) -> Club {
    Club {
        id: ClubId::new(),
        name: format!("{} Test Club", status),
        country: "Netherlands".to_string(),
        county: None,
        contact_email: "secretary@testclub.test".to_string(),
        status,
        rejection_reason: None,
        created_at: Utc::now(),
    }
}

/// Create an unconverted interest record for an event
pub fn test_interest(event_id: EventId) -> InterestRecord {
    InterestRecord {
        id: InterestId::new(),
        event_id,
        club_name: "Lyon Gaels".to_string(),
        contact_email: "teams@lyongaels.test".to_string(),
        expected_participants: 18,
        converted: false,
        reference_code: "TESTREF1".to_string(),
        created_at: Utc::now(),
    }
}

/// Create a converted interest record for an event
pub fn test_converted_interest(event_id: EventId) -> InterestRecord {
    InterestRecord {
        converted: true,
        ..test_interest(event_id)
    }
}
