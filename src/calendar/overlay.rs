use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};

use super::day::day_key;
use crate::types::DayMarking;

/// Highlight map handed to the calendar overlay, keyed by `YYYY-MM-DD`
pub type MarkedDates = BTreeMap<String, DayMarking>;

/// Visibility of the modal calendar
///
/// The overlay holds no date state; it reads the selection from the
/// controller and writes back through `on_calendar_select`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarOverlay {
    visible: bool,
}

impl CalendarOverlay {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}

/// Compute the overlay markings for a selection
///
/// The selected day is always marked `Selected`. Today gets a `TodayDot` only
/// when it differs from the selection, so a day never carries two markings.
pub fn marked_dates(selected: NaiveDate, today: NaiveDate) -> MarkedDates {
    let mut marks = MarkedDates::new();
    marks.insert(day_key(selected), DayMarking::Selected);
    if today != selected {
        marks.insert(day_key(today), DayMarking::TodayDot);
    }
    marks
}

/// One row of a month grid, Sunday first
pub type Week = [Option<NaiveDate>; 7];

/// Lay out a month as Sunday-first weeks, padding with `None`
///
/// Returns an empty grid for an invalid year/month.
pub fn month_grid(year: i32, month: u32) -> Vec<Week> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(first);

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut slot = lead;
    for date in first.iter_days().take(days as usize) {
        week[slot] = Some(date);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}

/// Move `date` by whole months, clamping the day to the target month's length
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let shifted = if delta >= 0 {
        date.checked_add_months(Months::new(delta as u32))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
