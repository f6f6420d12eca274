use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};

/// Day-string format exchanged with the calendar overlay
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` day-string into a calendar day
///
/// The string is read as plain year/month/day fields. No time zone is
/// involved, so the result never shifts by a day on hosts west of UTC.
pub fn parse_day(s: &str) -> CalendarResult<NaiveDate> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
        .map_err(|_| CalendarError::InvalidDayString(trimmed.to_string()))
}

/// Format a calendar day as the `YYYY-MM-DD` key used by the overlay
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}
