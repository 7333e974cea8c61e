use crate::modules::rosters::core::roster::RosterStatus;
use crate::modules::rosters::use_cases::save_roster::command::{AssignmentInput, SaveRoster};
use crate::shared::core::actor::Actor;
use crate::tests::fixtures::day;
use serde::Deserialize;
use std::fs;

pub const FIXED_USER_ID: &str = "user-fixed-0001";
pub const FIXED_ORGANIZATION_ID: &str = "org-fixed-0001";
pub const FIXED_REQUESTED_AT: i64 = 1_736_150_400_000;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRosterDto {
    pub week_start: String,
    pub status: RosterStatus,
    pub assignments: Vec<AssignmentInput>,
}

pub struct SaveRosterBuilder {
    inner: SaveRoster,
}

impl Default for SaveRosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SaveRosterBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/save_roster.json").unwrap();
        let dto: SaveRosterDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SaveRoster {
                week_start: day(&dto.week_start),
                status: dto.status,
                assignments: dto.assignments,
                roster_id: None,
                actor: Some(Actor::new(FIXED_USER_ID, FIXED_ORGANIZATION_ID)),
                requested_at: FIXED_REQUESTED_AT,
            },
        }
    }

    pub fn week_start(mut self, v: &str) -> Self {
        self.inner.week_start = day(v);
        self
    }

    pub fn status(mut self, v: RosterStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn assign(mut self, date: &str, driver_id: impl Into<String>) -> Self {
        self.inner.assignments.push(AssignmentInput {
            date: day(date),
            driver_id: driver_id.into(),
        });
        self
    }

    pub fn roster_id(mut self, v: impl Into<String>) -> Self {
        self.inner.roster_id = Some(v.into());
        self
    }

    pub fn actor(mut self, v: Actor) -> Self {
        self.inner.actor = Some(v);
        self
    }

    pub fn without_actor(mut self) -> Self {
        self.inner.actor = None;
        self
    }

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> SaveRoster {
        self.inner
    }
}

#[cfg(test)]
mod save_roster_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SaveRosterBuilder::default().build();
        assert_eq!(built.week_start, day("2025-01-06"));
        assert_eq!(built.status, RosterStatus::Published);
        assert!(built.assignments.is_empty());
        assert_eq!(built.roster_id, None);
        assert_eq!(built.requested_at, FIXED_REQUESTED_AT);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = SaveRosterBuilder::new()
            .week_start("2025-01-13")
            .status(RosterStatus::Modified)
            .assign("2025-01-14", "d9")
            .roster_id("r-9")
            .actor(Actor::new("u-9", "org-9"))
            .requested_at(42)
            .build();

        assert_eq!(custom.week_start, day("2025-01-13"));
        assert_eq!(custom.status, RosterStatus::Modified);
        assert_eq!(custom.assignments[0].driver_id, "d9");
        assert_eq!(custom.roster_id.as_deref(), Some("r-9"));
        assert_eq!(custom.actor, Some(Actor::new("u-9", "org-9")));
        assert_eq!(custom.requested_at, 42);
        assert_eq!(SaveRosterBuilder::new().without_actor().build().actor, None);
    }
}
