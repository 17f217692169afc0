//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of a mocking crate?
//! - Manual mocks are explicit and easy to debug
//! - The in-memory repositories double as a reference semantics for the
//!   Postgres adapters
//!
//! Note: For E2E/integration tests over HTTP, the AppState would need to
//! be made generic to support mock repositories. Service-layer tests
//! over these mocks cover the business logic instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
