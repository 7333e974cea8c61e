use crate::modules::rosters::adapters::mappers::roster_row::RosterRow;
use crate::modules::rosters::adapters::outbound::roster_store::{
    RosterStore, StoreError, WriteScope,
};
use crate::modules::rosters::core::roster::{Roster, RosterStatus};
use crate::shared::core::primitives::format_day_key;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Rows keyed by (organization_id, week_start day key), the store's unique key.
#[derive(Default)]
pub struct InMemoryRosterStore {
    rows: RwLock<HashMap<(String, String), RosterRow>>,
    saves: AtomicUsize,
    fail_on_save: Option<usize>,
    is_offline: bool,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Reject the n-th call to `save_roster` (1-based).
    pub fn fail_on_save(&mut self, n: usize) {
        self.fail_on_save = Some(n);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub async fn insert_row(&self, row: RosterRow) {
        let key = (row.organization_id.clone(), row.week_start.clone());
        self.rows.write().await.insert(key, row);
    }
}

#[async_trait::async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn load_roster(
        &self,
        organization_id: &str,
        week_start: NaiveDate,
    ) -> Result<Option<Roster>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Roster store offline".into()));
        }

        let key = (organization_id.to_string(), format_day_key(week_start));
        let row = self.rows.read().await.get(&key).cloned();
        row.map(Roster::try_from).transpose()
    }

    async fn save_roster(
        &self,
        scope: &WriteScope,
        mut roster: Roster,
    ) -> Result<Roster, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Roster store offline".into()));
        }

        let n = self.saves.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_save == Some(n) {
            return Err(StoreError::Backend(format!("Roster store rejected write #{n}")));
        }

        let week_key = format_day_key(roster.week_start);
        let key = (scope.organization_id.clone(), week_key);
        let mut guard = self.rows.write().await;

        if roster.status == RosterStatus::Published {
            roster.published_at = Some(scope.at);
            roster.published_by = Some(scope.actor_id.clone());
        } else if let Some(existing) = guard.get(&key) {
            roster.published_at = existing.published_at;
            roster.published_by = existing.published_by.clone();
        }

        let row = RosterRow::from_roster(scope, &roster)?;
        guard.insert(key, row.clone());
        Roster::try_from(row)
    }
}
