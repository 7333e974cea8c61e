use chrono::NaiveDate;

/// All timestamps in this crate are epoch milliseconds.
pub type EpochMillis = i64;

pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn parse_day_key(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DAY_KEY_FORMAT)
}

pub fn format_day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}
