//! PostgreSQL adapters
//!
//! SeaORM implementations of the repository ports.

pub mod club_repo;
pub mod day_pass_repo;
pub mod event_repo;
pub mod interest_repo;

pub use club_repo::PostgresClubRepository;
pub use day_pass_repo::PostgresDayPassRateRepository;
pub use event_repo::PostgresEventRepository;
pub use interest_repo::PostgresInterestRepository;
