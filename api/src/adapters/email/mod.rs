//! Mail adapter
//!
//! Implementation of the mailer port over a transactional mail HTTP API.

pub mod client;

pub use client::{AnyMailer, HttpMailer, NoopMailer};
