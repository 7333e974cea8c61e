use crate::modules::rosters::core::diff::Change;
use crate::modules::rosters::core::roster::Roster;
use chrono::NaiveDate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("week start {0} is not a Monday")]
    WeekStartNotMonday(NaiveDate),

    #[error("assignment date {date} is outside the week starting {week_start}")]
    DateOutsideWeek {
        date: NaiveDate,
        week_start: NaiveDate,
    },

    #[error("assignment for {0} has no driver")]
    MissingDriver(NaiveDate),
}

#[derive(Debug)]
pub enum Composition {
    Accepted {
        roster: Roster,
        changes: Vec<Change>,
    },
    Rejected {
        reason: ComposeError,
    },
}
