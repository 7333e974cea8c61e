use chrono::NaiveDate;

pub mod commands {
    pub mod save_roster;
}
pub mod drivers;
pub mod state;

/// Parse a `YYYY-MM-DD` day key, panicking on typos in test data.
pub fn day(key: &str) -> NaiveDate {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").unwrap()
}
