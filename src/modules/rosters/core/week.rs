use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub fn week_end(week_start: NaiveDate) -> NaiveDate {
    week_start + Duration::days(6)
}

pub fn is_within_week(week_start: NaiveDate, date: NaiveDate) -> bool {
    date >= week_start && date <= week_end(week_start)
}
