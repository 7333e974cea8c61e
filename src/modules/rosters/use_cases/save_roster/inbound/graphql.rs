use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::rosters::adapters::inbound::graphql_types::{
    GqlNotificationOutcome, GqlRoster, GqlSaveRosterInput,
};
use crate::modules::rosters::use_cases::save_roster::command::{AssignmentInput, SaveRoster};
use crate::shared::core::actor::Actor;
use crate::shared::core::primitives::parse_day_key;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSaveRosterResult {
    pub roster: GqlRoster,
    pub notifications: Option<GqlNotificationOutcome>,
}

#[derive(Default)]
pub struct SaveRosterMutation;

#[Object]
impl SaveRosterMutation {
    async fn save_roster(
        &self,
        context: &Context<'_>,
        input: GqlSaveRosterInput,
    ) -> GqlResult<GqlSaveRosterResult> {
        let state = context.data_unchecked::<AppState>();

        let week_start = parse_day_key(&input.week_start)
            .map_err(|e| async_graphql::Error::new(format!("invalid week_start: {e}")))?;
        let assignments = input
            .assignments
            .into_iter()
            .map(|a| {
                Ok(AssignmentInput {
                    date: parse_day_key(&a.date)
                        .map_err(|e| async_graphql::Error::new(format!("invalid date: {e}")))?,
                    driver_id: a.driver_id,
                })
            })
            .collect::<GqlResult<Vec<_>>>()?;

        let command = SaveRoster {
            week_start,
            status: input.status.into(),
            assignments,
            roster_id: input.roster_id,
            actor: context.data_opt::<Actor>().cloned(),
            requested_at: Utc::now().timestamp_millis(),
        };

        let outcome = state
            .save_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlSaveRosterResult {
            roster: outcome.roster.into(),
            notifications: outcome.notifications.map(Into::into),
        })
    }
}
