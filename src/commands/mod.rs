pub mod marks;
pub mod window;

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::calendar::parse_day;
use crate::clock::{system_clock, FixedClock, SharedClock};

/// Parse an optional `YYYY-MM-DD` argument
///
/// Returns `None` when no date was given.
pub fn parse_optional_day(date: Option<&str>) -> Result<Option<NaiveDate>> {
    date.map(|date_str| {
        parse_day(date_str).with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))
    })
    .transpose()
}

/// Build the clock for a command, pinned to `today` when given
pub fn resolve_clock(today: Option<&str>) -> Result<SharedClock> {
    Ok(match parse_optional_day(today)? {
        Some(day) => Arc::new(FixedClock::on(day)),
        None => system_clock(),
    })
}
