use crate::modules::rosters::core::roster::RosterStatus;
use crate::shared::core::actor::Actor;
use crate::shared::core::primitives::EpochMillis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentInput {
    pub date: NaiveDate,
    pub driver_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRoster {
    pub week_start: NaiveDate,
    pub status: RosterStatus,
    pub assignments: Vec<AssignmentInput>,
    pub roster_id: Option<String>,
    pub actor: Option<Actor>,
    pub requested_at: EpochMillis,
}
