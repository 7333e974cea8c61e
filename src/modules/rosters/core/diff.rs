use crate::modules::rosters::core::roster::RosterAssignment;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One date whose driver differs between two assignment lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    pub date: NaiveDate,
    pub previous_driver_id: Option<String>,
    pub new_driver_id: Option<String>,
}

/// Compare two assignment lists by date. Absence on one side counts as a
/// distinct value. Output is ordered by date, but callers should treat it as
/// a set.
pub fn diff(previous: &[RosterAssignment], current: &[RosterAssignment]) -> Vec<Change> {
    let before = drivers_by_date(previous);
    let after = drivers_by_date(current);
    let dates: BTreeSet<NaiveDate> = before.keys().chain(after.keys()).copied().collect();

    dates
        .into_iter()
        .filter_map(|date| {
            let previous_driver = before.get(&date).copied();
            let new_driver = after.get(&date).copied();
            (previous_driver != new_driver).then(|| Change {
                date,
                previous_driver_id: previous_driver.map(str::to_string),
                new_driver_id: new_driver.map(str::to_string),
            })
        })
        .collect()
}

// later entries win, matching supersede_by_date
fn drivers_by_date(assignments: &[RosterAssignment]) -> BTreeMap<NaiveDate, &str> {
    assignments
        .iter()
        .map(|a| (a.date, a.driver_id.as_str()))
        .collect()
}
