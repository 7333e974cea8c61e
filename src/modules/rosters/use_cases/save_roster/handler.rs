use crate::modules::rosters::adapters::outbound::driver_directory::{
    DirectoryError, DriverDirectory,
};
use crate::modules::rosters::adapters::outbound::driver_notifier::DriverNotifier;
use crate::modules::rosters::adapters::outbound::roster_store::{
    RosterStore, StoreError, WriteScope,
};
use crate::modules::rosters::core::driver::Driver;
use crate::modules::rosters::core::notification_outcome::NotificationOutcome;
use crate::modules::rosters::core::roster::{Roster, group_dates_by_driver};
use crate::modules::rosters::use_cases::errors::ApplicationError;
use crate::modules::rosters::use_cases::save_roster::command::SaveRoster;
use crate::modules::rosters::use_cases::save_roster::compose::{
    compose_roster, is_change_notification,
};
use crate::modules::rosters::use_cases::save_roster::composition::Composition;
use crate::modules::rosters::use_cases::save_roster::dispatcher::NotificationDispatcher;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::join;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRosterOutcome {
    pub roster: Roster,
    /// `None` for drafts, which never notify.
    pub notifications: Option<NotificationOutcome>,
}

#[derive(Debug, Error)]
enum NotifyPhaseError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct SaveRosterHandler<TStore, TDirectory, TNotifier>
where
    TStore: RosterStore + Send + Sync + 'static,
    TDirectory: DriverDirectory + Send + Sync + 'static,
    TNotifier: DriverNotifier + Send + Sync + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    dispatcher: Arc<NotificationDispatcher<TNotifier>>,
}

impl<TStore, TDirectory, TNotifier> SaveRosterHandler<TStore, TDirectory, TNotifier>
where
    TStore: RosterStore + Send + Sync + 'static,
    TDirectory: DriverDirectory + Send + Sync + 'static,
    TNotifier: DriverNotifier + Send + Sync + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        directory: Arc<TDirectory>,
        dispatcher: Arc<NotificationDispatcher<TNotifier>>,
    ) -> Self {
        Self {
            store,
            directory,
            dispatcher,
        }
    }

    /// Persist the roster, then notify affected drivers.
    ///
    /// Only authentication, validation and the first write can fail the
    /// save. Problems while notifying leave the saved roster in place and
    /// report zero notifications.
    pub async fn handle(
        &self,
        command: SaveRoster,
    ) -> Result<SaveRosterOutcome, ApplicationError> {
        let actor = command
            .actor
            .clone()
            .ok_or(ApplicationError::Unauthenticated)?;
        let week_start = command.week_start;
        let notifies = command.status.notifies_drivers();

        let (existing, drivers) = if notifies {
            let (existing, drivers) = join!(
                self.store.load_roster(&actor.organization_id, week_start),
                self.directory.list_active_drivers()
            );
            (existing?, Some(drivers))
        } else {
            let existing = self
                .store
                .load_roster(&actor.organization_id, week_start)
                .await?;
            (existing, None)
        };

        let previous_status = existing.as_ref().map(|r| r.status);
        let fallback_id = command
            .roster_id
            .clone()
            .unwrap_or_else(|| Uuid::now_v7().to_string());
        let scope = WriteScope {
            organization_id: actor.organization_id,
            actor_id: actor.user_id,
            at: command.requested_at,
        };

        let (roster, changes) = match compose_roster(existing.as_ref(), command, fallback_id) {
            Composition::Accepted { roster, changes } => (roster, changes),
            Composition::Rejected { reason } => {
                return Err(ApplicationError::Domain(reason.to_string()));
            }
        };

        let saved = self.store.save_roster(&scope, roster).await?;
        info!(
            roster_id = %saved.id,
            week_start = %saved.week_start,
            status = %saved.status,
            version = saved.version,
            changes = changes.len(),
            "roster saved"
        );

        let Some(drivers) = drivers else {
            return Ok(SaveRosterOutcome {
                roster: saved,
                notifications: None,
            });
        };

        let is_change = is_change_notification(previous_status, saved.status);
        match self.notify(&scope, &saved, drivers, is_change).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                warn!(
                    roster_id = %saved.id,
                    error = %err,
                    "notification phase failed, reporting zero notifications"
                );
                Ok(SaveRosterOutcome {
                    roster: saved,
                    notifications: Some(NotificationOutcome::default()),
                })
            }
        }
    }

    async fn notify(
        &self,
        scope: &WriteScope,
        saved: &Roster,
        drivers: Result<Vec<Driver>, DirectoryError>,
        is_change: bool,
    ) -> Result<SaveRosterOutcome, NotifyPhaseError> {
        let drivers: HashMap<String, Driver> =
            drivers?.into_iter().map(|d| (d.id.clone(), d)).collect();
        let groups = group_dates_by_driver(saved.assignments.iter().filter(|a| !a.is_notified()));

        let dispatch = self
            .dispatcher
            .dispatch_all(&groups, &drivers, saved.week_start, is_change, scope.at)
            .await;
        info!(
            roster_id = %saved.id,
            total = dispatch.outcome.total_drivers,
            sent = dispatch.outcome.sent,
            failed = dispatch.outcome.failed,
            "drivers notified"
        );

        if dispatch.stamped_count() == 0 {
            return Ok(SaveRosterOutcome {
                roster: saved.clone(),
                notifications: Some(dispatch.outcome),
            });
        }

        let stamped = saved
            .clone()
            .with_notification_stamps(&dispatch.assignments);
        let persisted = self.store.save_roster(scope, stamped).await?;
        Ok(SaveRosterOutcome {
            roster: persisted,
            notifications: Some(dispatch.outcome),
        })
    }
}
