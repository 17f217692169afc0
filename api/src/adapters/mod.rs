//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod email;
pub mod postgres;

pub use email::{AnyMailer, HttpMailer, NoopMailer};
pub use postgres::{
    PostgresClubRepository, PostgresDayPassRateRepository, PostgresEventRepository,
    PostgresInterestRepository,
};
