use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::rosters::adapters::inbound::graphql_types::{GqlDriver, GqlRoster};
use crate::modules::rosters::use_cases::load_roster_for_week::handler::LoadRosterForWeek;
use crate::shared::core::actor::Actor;
use crate::shared::core::primitives::parse_day_key;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRosterForWeek {
    pub roster: GqlRoster,
    pub drivers: Vec<GqlDriver>,
}

#[derive(Default)]
pub struct RosterForWeekQuery;

#[Object]
impl RosterForWeekQuery {
    async fn roster_for_week(
        &self,
        context: &Context<'_>,
        week_start: String,
    ) -> GqlResult<GqlRosterForWeek> {
        let state = context.data_unchecked::<AppState>();
        let week_start = parse_day_key(&week_start)
            .map_err(|e| async_graphql::Error::new(format!("invalid week_start: {e}")))?;

        let loaded = state
            .load_handler
            .handle(LoadRosterForWeek {
                week_start,
                actor: context.data_opt::<Actor>().cloned(),
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlRosterForWeek {
            roster: loaded.roster.into(),
            drivers: loaded.drivers.into_iter().map(Into::into).collect(),
        })
    }
}
