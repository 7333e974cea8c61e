use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-save report of which drivers were told about their schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOutcome {
    pub total_drivers: usize,
    pub sent: usize,
    pub failed: usize,
    pub failures: Vec<NotificationFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFailure {
    pub driver_id: String,
    pub driver_email: Option<String>,
    pub driver_name: Option<String>,
    pub message: String,
    pub dates: Vec<NaiveDate>,
}

impl NotificationOutcome {
    pub fn for_drivers(total_drivers: usize) -> Self {
        Self {
            total_drivers,
            ..Self::default()
        }
    }

    pub fn record_sent(&mut self) {
        self.sent += 1;
    }

    pub fn record_failure(&mut self, failure: NotificationFailure) {
        self.failed += 1;
        self.failures.push(failure);
    }
}
