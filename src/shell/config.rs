use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_APP_NAME: &str = "Roster";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not valid: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("mail settings are incomplete, missing {0}")]
    IncompleteMail(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` keeps mail in memory.
    pub mail: Option<MailSettings>,
    pub notification_timeout: Duration,
    pub drivers_file: Option<String>,
    pub app_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = get("ROSTER_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "ROSTER_BIND_ADDR",
                message: e.to_string(),
            })?;

        let timeout_ms = match get("ROSTER_NOTIFICATION_TIMEOUT_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "ROSTER_NOTIFICATION_TIMEOUT_MS",
                message: e.to_string(),
            })?,
            None => DEFAULT_NOTIFICATION_TIMEOUT_MS,
        };

        let mail = match (
            get("ROSTER_MAIL_API_URL"),
            get("ROSTER_MAIL_API_KEY"),
            get("ROSTER_MAIL_FROM"),
        ) {
            (None, None, None) => None,
            (Some(api_url), Some(api_key), Some(from)) => Some(MailSettings {
                api_url,
                api_key,
                from,
            }),
            (None, _, _) => return Err(ConfigError::IncompleteMail("ROSTER_MAIL_API_URL")),
            (_, None, _) => return Err(ConfigError::IncompleteMail("ROSTER_MAIL_API_KEY")),
            (_, _, None) => return Err(ConfigError::IncompleteMail("ROSTER_MAIL_FROM")),
        };

        Ok(Self {
            bind_addr,
            mail,
            notification_timeout: Duration::from_millis(timeout_ms),
            drivers_file: get("ROSTER_DRIVERS_FILE"),
            app_name: get("ROSTER_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
        })
    }

    /// Sender address for schedule mail.
    pub fn mail_from(&self) -> &str {
        self.mail
            .as_ref()
            .map(|m| m.from.as_str())
            .unwrap_or("roster@localhost")
    }
}
