use crate::modules::rosters::adapters::outbound::roster_store::{StoreError, WriteScope};
use crate::modules::rosters::core::roster::{Roster, RosterAssignment, supersede_by_date};
use crate::shared::core::primitives::{EpochMillis, format_day_key, parse_day_key};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// Wire shape of a stored roster. Nothing here is trusted until it has been
/// converted into a `Roster`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub id: String,
    pub organization_id: String,
    pub week_start: String,
    pub status: String,
    pub version: i64,
    pub assignments: Json,
    pub published_at: Option<EpochMillis>,
    pub published_by: Option<String>,
    pub updated_at: EpochMillis,
    pub updated_by: String,
}

impl RosterRow {
    pub fn from_roster(scope: &WriteScope, roster: &Roster) -> Result<Self, StoreError> {
        let assignments = serde_json::to_value(&roster.assignments)
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        Ok(Self {
            id: roster.id.clone(),
            organization_id: scope.organization_id.clone(),
            week_start: format_day_key(roster.week_start),
            status: roster.status.as_str().to_string(),
            version: roster.version,
            assignments,
            published_at: roster.published_at,
            published_by: roster.published_by.clone(),
            updated_at: scope.at,
            updated_by: scope.actor_id.clone(),
        })
    }
}

impl TryFrom<RosterRow> for Roster {
    type Error = StoreError;

    fn try_from(row: RosterRow) -> Result<Self, Self::Error> {
        let week_start = parse_day_key(&row.week_start).map_err(|err| {
            let key = &row.week_start;
            StoreError::Corrupt(format!("roster {} week_start {key:?}: {err}", row.id))
        })?;
        let status = row
            .status
            .parse()
            .map_err(|err| StoreError::Corrupt(format!("roster {}: {err}", row.id)))?;
        if row.version < 1 {
            return Err(StoreError::Corrupt(format!(
                "roster {} has version {}",
                row.id, row.version
            )));
        }
        let assignments: Vec<RosterAssignment> = match row.assignments {
            Json::Null => Vec::new(),
            value => serde_json::from_value(value).map_err(|err| {
                StoreError::Corrupt(format!("roster {} assignments: {err}", row.id))
            })?,
        };

        Ok(Roster {
            id: row.id,
            week_start,
            status,
            version: row.version,
            assignments: supersede_by_date(assignments),
            published_at: row.published_at,
            published_by: row.published_by,
        })
    }
}
