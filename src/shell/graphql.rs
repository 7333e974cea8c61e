use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::rosters::use_cases::list_active_drivers::inbound::graphql::ActiveDriversQuery;
use crate::modules::rosters::use_cases::load_roster_for_week::inbound::graphql::RosterForWeekQuery;
use crate::modules::rosters::use_cases::save_roster::inbound::graphql::SaveRosterMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(RosterForWeekQuery, ActiveDriversQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SaveRosterMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
