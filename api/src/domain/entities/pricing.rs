//! Day-pass pricing domain entity
//!
//! A per-participant hospitality fee charged by a hosting club. One rate
//! per club; the platform default applies when no rate is configured.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::club::ClubId;

/// A hosting club's configured day-pass rate
#[derive(Debug, Clone, Serialize)]
pub struct DayPassRate {
    pub club_id: ClubId,
    /// Price per travelling participant, in euro
    pub price_per_participant: f64,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to set a day-pass rate
#[derive(Debug, Clone)]
pub struct NewDayPassRate {
    pub club_id: ClubId,
    pub price_per_participant: f64,
}
