//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod mailer;
pub mod repositories;

pub use mailer::{Mailer, OutboundEmail};
pub use repositories::{
    ClubRepository, DayPassRateRepository, EventRepository, InterestRepository,
};
