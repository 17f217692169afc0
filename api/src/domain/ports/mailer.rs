//! Mailer port
//!
//! The platform notifies club contacts when an administrator decides on
//! their submission. Dispatch goes through a transactional mail API;
//! this trait abstracts it so services can be tested without a network.

use async_trait::async_trait;

use crate::error::MailError;

/// A plain-text outbound notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Client for dispatching outbound notifications
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
