use async_graphql::{Enum, InputObject, SimpleObject};

use crate::modules::rosters::core::driver::Driver;
use crate::modules::rosters::core::notification_outcome::{
    NotificationFailure, NotificationOutcome,
};
use crate::modules::rosters::core::roster::{Roster, RosterAssignment, RosterStatus};
use crate::shared::core::primitives::format_day_key;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum GqlRosterStatus {
    Draft,
    Published,
    Modified,
}

impl From<RosterStatus> for GqlRosterStatus {
    fn from(status: RosterStatus) -> Self {
        match status {
            RosterStatus::Draft => GqlRosterStatus::Draft,
            RosterStatus::Published => GqlRosterStatus::Published,
            RosterStatus::Modified => GqlRosterStatus::Modified,
        }
    }
}

impl From<GqlRosterStatus> for RosterStatus {
    fn from(status: GqlRosterStatus) -> Self {
        match status {
            GqlRosterStatus::Draft => RosterStatus::Draft,
            GqlRosterStatus::Published => RosterStatus::Published,
            GqlRosterStatus::Modified => RosterStatus::Modified,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAssignment {
    pub date: String,
    pub driver_id: String,
    pub previous_driver_id: Option<String>,
    pub notified_at: Option<i64>,
    pub notification_id: Option<String>,
}

impl From<RosterAssignment> for GqlAssignment {
    fn from(a: RosterAssignment) -> Self {
        Self {
            date: format_day_key(a.date),
            driver_id: a.driver_id,
            previous_driver_id: a.previous_driver_id,
            notified_at: a.notified_at,
            notification_id: a.notification_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRoster {
    pub id: String,
    pub week_start: String,
    pub status: GqlRosterStatus,
    pub version: i64,
    pub assignments: Vec<GqlAssignment>,
    pub published_at: Option<i64>,
    pub published_by: Option<String>,
}

impl From<Roster> for GqlRoster {
    fn from(r: Roster) -> Self {
        Self {
            id: r.id,
            week_start: format_day_key(r.week_start),
            status: r.status.into(),
            version: r.version,
            assignments: r.assignments.into_iter().map(Into::into).collect(),
            published_at: r.published_at,
            published_by: r.published_by,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDriver {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
    pub color: Option<String>,
    pub vehicle_id: Option<String>,
}

impl From<Driver> for GqlDriver {
    fn from(d: Driver) -> Self {
        Self {
            id: d.id,
            name: d.name,
            email: d.email,
            role: d.role,
            color: d.color,
            vehicle_id: d.vehicle_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlNotificationFailure {
    pub driver_id: String,
    pub driver_email: Option<String>,
    pub driver_name: Option<String>,
    pub message: String,
    pub dates: Vec<String>,
}

impl From<NotificationFailure> for GqlNotificationFailure {
    fn from(f: NotificationFailure) -> Self {
        Self {
            driver_id: f.driver_id,
            driver_email: f.driver_email,
            driver_name: f.driver_name,
            message: f.message,
            dates: f.dates.into_iter().map(format_day_key).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlNotificationOutcome {
    pub total_drivers: i64,
    pub sent: i64,
    pub failed: i64,
    pub failures: Vec<GqlNotificationFailure>,
}

impl From<NotificationOutcome> for GqlNotificationOutcome {
    fn from(o: NotificationOutcome) -> Self {
        Self {
            total_drivers: o.total_drivers as i64,
            sent: o.sent as i64,
            failed: o.failed as i64,
            failures: o.failures.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(InputObject, Clone)]
pub struct GqlAssignmentInput {
    /// `YYYY-MM-DD`
    pub date: String,
    pub driver_id: String,
}

#[derive(InputObject, Clone)]
pub struct GqlSaveRosterInput {
    /// Monday of the week, `YYYY-MM-DD`.
    pub week_start: String,
    pub status: GqlRosterStatus,
    pub assignments: Vec<GqlAssignmentInput>,
    pub roster_id: Option<String>,
}
