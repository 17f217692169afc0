//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod clubs;
pub mod events;
pub mod interests;
pub mod pricing;
pub mod reports;

pub use clubs::{approve_club, list_clubs, match_club, register_club, reject_club};
pub use events::{approve_event, get_event, list_events, reject_event, submit_event};
pub use interests::{convert_interest, list_interests, register_interest};
pub use pricing::{get_day_pass_rate, set_day_pass_rate};
pub use reports::{dashboard, event_demand, event_revenue};
