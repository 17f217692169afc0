//! Event date-clash detection
//!
//! Flags calendar dates carrying more than one event while at least one
//! of them is still awaiting review, so administrators can weigh a
//! pending submission against what is already on that date. Dates whose
//! events are all approved are deliberately not flagged: the detector
//! triages pending submissions, it does not audit past decisions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::Event;

/// Events sharing one calendar date, at least one of them pending.
/// Derived per listing; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ClashGroup {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

impl ClashGroup {
    pub fn contains(&self, event_id: &crate::domain::entities::EventId) -> bool {
        self.events.iter().any(|e| &e.id == event_id)
    }
}

/// Group events by calendar date and keep the dates that clash.
///
/// A date clashes when it carries two or more events and at least one of
/// them is pending. Rejected events still count toward membership, so a
/// pending submission clashes with a previously rejected one. Events
/// without a start date are skipped; one bad record never affects the
/// rest of the grouping. Groups come back in ascending date order.
pub fn detect_clashes(events: &[Event]) -> Vec<ClashGroup> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();

    for event in events {
        let Some(date) = event.start_date else {
            continue;
        };
        buckets.entry(date).or_default().push(event.clone());
    }

    buckets
        .into_iter()
        .filter(|(_, group)| group.len() >= 2 && group.iter().any(|e| e.is_pending()))
        .map(|(date, events)| ClashGroup { date, events })
        .collect()
}

/// Count of clashing dates, for the dashboard summary
pub fn clash_count(events: &[Event]) -> usize {
    detect_clashes(events).len()
}
