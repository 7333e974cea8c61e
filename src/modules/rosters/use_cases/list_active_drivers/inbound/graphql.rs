use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::rosters::adapters::inbound::graphql_types::GqlDriver;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ActiveDriversQuery;

#[Object]
impl ActiveDriversQuery {
    async fn active_drivers(&self, context: &Context<'_>) -> GqlResult<Vec<GqlDriver>> {
        let state = context.data_unchecked::<AppState>();
        let drivers = state.drivers.list_active_drivers().await?;
        Ok(drivers.into_iter().map(Into::into).collect())
    }
}
