use crate::shared::core::primitives::EpochMillis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterStatus {
    #[default]
    Draft,
    Published,
    Modified,
}

impl RosterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterStatus::Draft => "draft",
            RosterStatus::Published => "published",
            RosterStatus::Modified => "modified",
        }
    }

    /// Saving with this status sends schedule notifications to drivers.
    pub fn notifies_drivers(&self) -> bool {
        matches!(self, RosterStatus::Published | RosterStatus::Modified)
    }
}

impl fmt::Display for RosterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown roster status: {0}")]
pub struct UnknownRosterStatus(pub String);

impl FromStr for RosterStatus {
    type Err = UnknownRosterStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(RosterStatus::Draft),
            "published" => Ok(RosterStatus::Published),
            "modified" => Ok(RosterStatus::Modified),
            _ => Err(UnknownRosterStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterAssignment {
    pub date: NaiveDate,
    pub driver_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_driver_id: Option<String>,
    #[serde(default)]
    pub notified_at: Option<EpochMillis>,
    #[serde(default)]
    pub notification_id: Option<String>,
}

impl RosterAssignment {
    pub fn new(date: NaiveDate, driver_id: impl Into<String>) -> Self {
        Self {
            date,
            driver_id: driver_id.into(),
            previous_driver_id: None,
            notified_at: None,
            notification_id: None,
        }
    }

    pub fn is_notified(&self) -> bool {
        self.notified_at.is_some()
    }

    pub fn stamped(self, notified_at: EpochMillis, notification_id: impl Into<String>) -> Self {
        Self {
            notified_at: Some(notified_at),
            notification_id: Some(notification_id.into()),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub id: String,
    pub week_start: NaiveDate,
    pub status: RosterStatus,
    pub version: i64,
    pub assignments: Vec<RosterAssignment>,
    pub published_at: Option<EpochMillis>,
    pub published_by: Option<String>,
}

impl Roster {
    /// A roster that has never been saved.
    pub fn draft(id: impl Into<String>, week_start: NaiveDate) -> Self {
        Self {
            id: id.into(),
            week_start,
            status: RosterStatus::Draft,
            version: 1,
            assignments: Vec::new(),
            published_at: None,
            published_by: None,
        }
    }

    pub fn assignment_for(&self, date: NaiveDate) -> Option<&RosterAssignment> {
        self.assignments.iter().find(|a| a.date == date)
    }

    /// Copy notification stamps onto the matching (date, driver) assignments.
    /// Entries without a stamp are ignored.
    pub fn with_notification_stamps(mut self, stamped: &[RosterAssignment]) -> Self {
        for assignment in self.assignments.iter_mut() {
            let stamp = stamped.iter().find(|s| {
                s.date == assignment.date && s.driver_id == assignment.driver_id && s.is_notified()
            });
            if let Some(stamp) = stamp {
                assignment.notified_at = stamp.notified_at;
                assignment.notification_id = stamp.notification_id.clone();
            }
        }
        self
    }
}

/// Keep one assignment per date; a later entry supersedes an earlier one.
/// The result is ordered by date.
pub fn supersede_by_date(assignments: Vec<RosterAssignment>) -> Vec<RosterAssignment> {
    let by_date: BTreeMap<NaiveDate, RosterAssignment> =
        assignments.into_iter().map(|a| (a.date, a)).collect();
    by_date.into_values().collect()
}

pub fn group_dates_by_driver<'a>(
    assignments: impl IntoIterator<Item = &'a RosterAssignment>,
) -> BTreeMap<String, Vec<NaiveDate>> {
    let mut groups: BTreeMap<String, Vec<NaiveDate>> = BTreeMap::new();
    for assignment in assignments {
        groups
            .entry(assignment.driver_id.clone())
            .or_default()
            .push(assignment.date);
    }
    for dates in groups.values_mut() {
        dates.sort();
    }
    groups
}
