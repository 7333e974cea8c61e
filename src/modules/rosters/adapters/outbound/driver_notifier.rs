use crate::shared::infrastructure::mailer::MailerError;
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub email: String,
    pub name: String,
    pub dates: Vec<NaiveDate>,
    pub week_start: NaiveDate,
    pub is_change: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationReceipt {
    pub notification_id: String,
}

/// Every variant fails the one send it came from. `Unavailable` means the
/// channel could not be reached at all, e.g. a refused connection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification rejected: {0}")]
    Rejected(String),

    #[error("notification transport error: {0}")]
    Transport(String),

    #[error("notification channel unavailable: {0}")]
    Unavailable(String),
}

impl From<MailerError> for NotificationError {
    fn from(err: MailerError) -> Self {
        match err {
            MailerError::Rejected(message) => NotificationError::Rejected(message),
            MailerError::Transport(message) => NotificationError::Transport(message),
            MailerError::Unavailable(message) => NotificationError::Unavailable(message),
        }
    }
}

#[async_trait]
pub trait DriverNotifier: Send + Sync {
    async fn send_notification(
        &self,
        request: NotificationRequest,
    ) -> Result<NotificationReceipt, NotificationError>;
}
