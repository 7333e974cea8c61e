use crate::modules::rosters::adapters::outbound::driver_notifier::{
    DriverNotifier, NotificationError, NotificationRequest,
};
use crate::modules::rosters::core::driver::Driver;
use crate::modules::rosters::core::notification_outcome::{
    NotificationFailure, NotificationOutcome,
};
use crate::modules::rosters::core::roster::RosterAssignment;
use crate::shared::core::primitives::EpochMillis;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Result of one dispatch batch. `assignments` holds every dispatched date,
/// stamped when its driver's send succeeded.
#[derive(Debug, Default)]
pub struct Dispatch {
    pub outcome: NotificationOutcome,
    pub assignments: Vec<RosterAssignment>,
}

impl Dispatch {
    pub fn stamped_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_notified()).count()
    }
}

pub struct NotificationDispatcher<TNotifier>
where
    TNotifier: DriverNotifier + Send + Sync + 'static,
{
    notifier: Arc<TNotifier>,
    send_timeout: Duration,
}

impl<TNotifier> NotificationDispatcher<TNotifier>
where
    TNotifier: DriverNotifier + Send + Sync + 'static,
{
    pub fn new(notifier: Arc<TNotifier>, send_timeout: Duration) -> Self {
        Self {
            notifier,
            send_timeout,
        }
    }

    /// Send one notification per driver group. Every send failure, a dropped
    /// connection included, is recorded against its driver and the batch
    /// carries on.
    pub async fn dispatch_all(
        &self,
        groups: &BTreeMap<String, Vec<NaiveDate>>,
        drivers: &HashMap<String, Driver>,
        week_start: NaiveDate,
        is_change: bool,
        notified_at: EpochMillis,
    ) -> Dispatch {
        let timeout_ms = self.send_timeout.as_millis();
        let mut dispatch = Dispatch {
            outcome: NotificationOutcome::for_drivers(groups.len()),
            assignments: Vec::new(),
        };

        for (driver_id, dates) in groups {
            let unstamped = || dates.iter().map(|d| RosterAssignment::new(*d, driver_id));

            let Some(driver) = drivers.get(driver_id) else {
                debug!(driver_id = %driver_id, "driver not in directory, skipping notification");
                dispatch.assignments.extend(unstamped());
                continue;
            };
            let Some(email) = driver.notification_email() else {
                debug!(driver_id = %driver_id, "driver has no email, skipping notification");
                dispatch.assignments.extend(unstamped());
                continue;
            };

            let request = NotificationRequest {
                email: email.to_string(),
                name: driver.name.clone(),
                dates: dates.clone(),
                week_start,
                is_change,
            };
            let send = self.notifier.send_notification(request);
            let sent = match tokio::time::timeout(self.send_timeout, send).await {
                Ok(sent) => sent,
                Err(_) => {
                    let message = format!("send timed out after {timeout_ms} ms");
                    Err(NotificationError::Transport(message))
                }
            };

            match sent {
                Ok(receipt) => {
                    dispatch.outcome.record_sent();
                    let id = receipt.notification_id.as_str();
                    let stamped = unstamped().map(|a| a.stamped(notified_at, id));
                    dispatch.assignments.extend(stamped);
                }
                Err(err) => {
                    warn!(driver_id = %driver_id, error = %err, "driver notification failed");
                    dispatch.outcome.record_failure(NotificationFailure {
                        driver_id: driver_id.clone(),
                        driver_email: Some(email.to_string()),
                        driver_name: Some(driver.name.clone()),
                        message: err.to_string(),
                        dates: dates.clone(),
                    });
                    dispatch.assignments.extend(unstamped());
                }
            }
        }

        dispatch
    }
}
