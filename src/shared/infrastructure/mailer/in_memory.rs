use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingEmail};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    rejected_recipients: Mutex<HashSet<String>>,
    delay_send_ms: AtomicU64,
    issued: AtomicUsize,
    is_offline: bool,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn reject_recipient(&self, email: impl Into<String>) {
        self.rejected_recipients.lock().await.insert(email.into());
    }

    pub async fn accept_recipient(&self, email: &str) {
        self.rejected_recipients.lock().await.remove(email);
    }

    pub fn set_delay_send_ms(&self, ms: u64) {
        self.delay_send_ms.store(ms, Ordering::SeqCst);
    }

    pub async fn recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .map(|e| e.to.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<String, MailerError> {
        if self.is_offline {
            return Err(MailerError::Unavailable("Mailer offline".into()));
        }

        let delay = self.delay_send_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if self.rejected_recipients.lock().await.contains(&email.to) {
            return Err(MailerError::Rejected(format!("recipient {} rejected", email.to)));
        }

        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(to = %email.to, subject = %email.subject, "in-memory mail sent");
        self.sent.lock().await.push(email);
        Ok(format!("mail-{n:04}"))
    }
}
