use crate::modules::rosters::adapters::outbound::driver_directory::DriverDirectory;
use crate::modules::rosters::adapters::outbound::roster_store::RosterStore;
use crate::modules::rosters::core::driver::Driver;
use crate::modules::rosters::core::roster::Roster;
use crate::modules::rosters::core::week::week_start_of;
use crate::modules::rosters::use_cases::errors::ApplicationError;
use crate::shared::core::actor::Actor;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::join;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRosterForWeek {
    /// Any day of the wanted week; aligned to its Monday.
    pub week_start: NaiveDate,
    pub actor: Option<Actor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterForWeek {
    pub roster: Roster,
    pub drivers: Vec<Driver>,
}

pub struct LoadRosterForWeekHandler<TStore, TDirectory>
where
    TStore: RosterStore + Send + Sync + 'static,
    TDirectory: DriverDirectory + Send + Sync + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
}

impl<TStore, TDirectory> LoadRosterForWeekHandler<TStore, TDirectory>
where
    TStore: RosterStore + Send + Sync + 'static,
    TDirectory: DriverDirectory + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>) -> Self {
        Self { store, directory }
    }

    /// The stored roster for the week, or an unsaved draft when there is none.
    pub async fn handle(
        &self,
        query: LoadRosterForWeek,
    ) -> Result<RosterForWeek, ApplicationError> {
        let actor = query.actor.ok_or(ApplicationError::Unauthenticated)?;
        let week_start = week_start_of(query.week_start);

        let (roster, drivers) = join!(
            self.store.load_roster(&actor.organization_id, week_start),
            self.directory.list_active_drivers()
        );

        let roster = match roster? {
            Some(roster) => roster,
            None => Roster::draft(Uuid::now_v7().to_string(), week_start),
        };
        Ok(RosterForWeek {
            roster,
            drivers: drivers?,
        })
    }
}
