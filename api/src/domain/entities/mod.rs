//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod club;
pub mod event;
pub mod interest;
pub mod pricing;

pub use club::{Club, ClubId, ClubStatus, NewClub};
pub use event::{ApprovalStatus, Category, Event, EventId, NewEvent};
pub use interest::{InterestId, InterestRecord, NewInterest};
pub use pricing::{DayPassRate, NewDayPassRate};
