use crate::modules::rosters::core::diff::diff;
use crate::modules::rosters::core::roster::{
    Roster, RosterAssignment, RosterStatus, supersede_by_date,
};
use crate::modules::rosters::core::week::{is_week_start, is_within_week};
use crate::modules::rosters::use_cases::save_roster::command::SaveRoster;
use crate::modules::rosters::use_cases::save_roster::composition::{ComposeError, Composition};

/// Build the next version of a week's roster from the stored one (if any)
/// and the supplied assignments, which replace the stored list wholesale.
///
/// Notification stamps survive for dates whose driver did not change, so
/// only new or reassigned dates are notified again.
pub fn compose_roster(
    existing: Option<&Roster>,
    command: SaveRoster,
    fallback_id: String,
) -> Composition {
    let week_start = command.week_start;
    if !is_week_start(week_start) {
        return Composition::Rejected {
            reason: ComposeError::WeekStartNotMonday(week_start),
        };
    }

    let supplied = supersede_by_date(
        command
            .assignments
            .into_iter()
            .map(|a| RosterAssignment::new(a.date, a.driver_id.trim()))
            .collect(),
    );
    for assignment in &supplied {
        if assignment.driver_id.is_empty() {
            return Composition::Rejected {
                reason: ComposeError::MissingDriver(assignment.date),
            };
        }
        if !is_within_week(week_start, assignment.date) {
            return Composition::Rejected {
                reason: ComposeError::DateOutsideWeek {
                    date: assignment.date,
                    week_start,
                },
            };
        }
    }

    let previous = existing.map(|r| r.assignments.as_slice()).unwrap_or(&[]);
    let changes = diff(previous, &supplied);

    let assignments = supplied
        .into_iter()
        .map(|assignment| carry_forward(existing, assignment))
        .collect();

    let roster = Roster {
        id: existing.map(|r| r.id.clone()).unwrap_or(fallback_id),
        week_start,
        status: command.status,
        version: existing.map_or(1, |r| r.version + 1),
        assignments,
        published_at: existing.and_then(|r| r.published_at),
        published_by: existing.and_then(|r| r.published_by.clone()),
    };

    Composition::Accepted { roster, changes }
}

fn carry_forward(existing: Option<&Roster>, assignment: RosterAssignment) -> RosterAssignment {
    match existing.and_then(|r| r.assignment_for(assignment.date)) {
        Some(prior) if prior.driver_id == assignment.driver_id => RosterAssignment {
            previous_driver_id: prior.previous_driver_id.clone(),
            notified_at: prior.notified_at,
            notification_id: prior.notification_id.clone(),
            ..assignment
        },
        Some(prior) => RosterAssignment {
            previous_driver_id: Some(prior.driver_id.clone()),
            ..assignment
        },
        None => assignment,
    }
}

/// Drivers get the "schedule changed" template only when a published roster
/// is re-saved as modified.
pub fn is_change_notification(previous: Option<RosterStatus>, next: RosterStatus) -> bool {
    previous == Some(RosterStatus::Published) && next == RosterStatus::Modified
}
