use crate::shared::infrastructure::mailer::{Mailer, MailerError, OutgoingEmail};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Mailer backed by a transactional email HTTP API (`POST {base_url}/emails`).
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl HttpMailer {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<String, MailerError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await
            .map_err(|err| {
                if err.is_connect() {
                    MailerError::Unavailable(err.to_string())
                } else {
                    MailerError::Transport(err.to_string())
                }
            })?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected(format!("{status}: {body}")));
        }
        if !status.is_success() {
            return Err(MailerError::Transport(format!("mail provider returned {status}")));
        }

        let body: SendEmailResponse = response
            .json()
            .await
            .map_err(|err| MailerError::Transport(err.to_string()))?;
        Ok(body.id)
    }
}
