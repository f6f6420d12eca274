use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::{month_grid, shift_month};
use crate::calendar::overlay::Week;

use super::action::PickerMove;

/// Cursor of the month picker drawn inside the calendar overlay
///
/// Pure view state. It is seeded from the selection each time the overlay
/// opens and never feeds back into the controller except through a confirmed
/// day press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPickerState {
    cursor: NaiveDate,
}

impl DayPickerState {
    pub fn new(cursor: NaiveDate) -> Self {
        Self { cursor }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn reset_to(&mut self, date: NaiveDate) {
        self.cursor = date;
    }

    pub fn apply(&mut self, movement: PickerMove) {
        self.cursor = match movement {
            PickerMove::Days(delta) if delta >= 0 => self
                .cursor
                .checked_add_days(Days::new(delta as u64))
                .unwrap_or(self.cursor),
            PickerMove::Days(delta) => self
                .cursor
                .checked_sub_days(Days::new(delta.unsigned_abs()))
                .unwrap_or(self.cursor),
            PickerMove::Months(delta) => shift_month(self.cursor, delta),
        };
    }

    /// Weeks of the month the cursor is in
    pub fn visible_month(&self) -> Vec<Week> {
        month_grid(self.cursor.year(), self.cursor.month())
    }
}
