//! Authentication
//!
//! Admin API key middleware for protected routes.

pub mod api_key;

pub use api_key::{admin_auth_middleware, hash_api_key};
