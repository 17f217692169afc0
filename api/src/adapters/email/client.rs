//! Transactional mail API client implementation
//!
//! Posts plain-text messages to an HTTP send endpoint (Mailjet-style
//! key/secret basic auth). `NoopMailer` is wired in when no credentials
//! are configured.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::Serialize;

use crate::domain::ports::{Mailer, OutboundEmail};
use crate::error::MailError;

/// Implementation of the transactional mail client
pub struct HttpMailer {
    http: Client,
    send_url: String,
    auth_header: String,
    from: String,
}

impl HttpMailer {
    pub fn new(send_url: String, api_key: String, api_secret: String, from: String) -> Self {
        let credentials =
            base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", api_key, api_secret));
        Self {
            http: Client::new(),
            send_url: send_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {}", credentials),
            from,
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let request = SendRequest {
            from: &self.from,
            to: &email.to,
            subject: &email.subject,
            text: &email.body,
        };

        let response = self
            .http
            .post(&self.send_url)
            .header("Authorization", &self.auth_header)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(MailError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Mailer used when no mail credentials are configured.
/// Logs the notification instead of sending it.
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        tracing::info!(to = %email.to, subject = %email.subject, "Mail disabled, dropping notification");
        Ok(())
    }
}

/// Mailer selected at startup from configuration
pub enum AnyMailer {
    Http(HttpMailer),
    Noop(NoopMailer),
}

#[async_trait]
impl Mailer for AnyMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        match self {
            AnyMailer::Http(mailer) => mailer.send(email).await,
            AnyMailer::Noop(mailer) => mailer.send(email).await,
        }
    }
}
