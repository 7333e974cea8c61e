use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailerError {
    #[error("mail rejected: {0}")]
    Rejected(String),

    #[error("mail transport error: {0}")]
    Transport(String),

    #[error("mail service unavailable: {0}")]
    Unavailable(String),
}

/// Sends one email and returns the provider-issued message id.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<String, MailerError>;
}

pub mod http;
pub mod in_memory;
