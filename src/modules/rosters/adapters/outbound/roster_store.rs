use crate::modules::rosters::core::roster::Roster;
use crate::shared::core::primitives::EpochMillis;
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("corrupt roster row: {0}")]
    Corrupt(String),
}

/// Who is writing, for which organization, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteScope {
    pub organization_id: String,
    pub actor_id: String,
    pub at: EpochMillis,
}

/// One roster per (organization, week_start).
///
/// `save_roster` is an upsert on that key. The caller supplies the version;
/// the store does not detect concurrent writers, so the last write wins.
/// Saving a `published` roster stamps `published_at` and `published_by`.
#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn load_roster(
        &self,
        organization_id: &str,
        week_start: NaiveDate,
    ) -> Result<Option<Roster>, StoreError>;

    async fn save_roster(&self, scope: &WriteScope, roster: Roster) -> Result<Roster, StoreError>;
}
