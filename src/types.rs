use chrono::NaiveDate;

/// Number of days materialized in the carousel window
pub const WINDOW_SIZE: usize = 15;

/// Index of the center date within the window
pub const WINDOW_CENTER: usize = 7;

/// Days on each side of the center date
pub const WINDOW_RADIUS: i64 = WINDOW_CENTER as i64;

/// One card of the date carousel
///
/// Equality compares the calendar day and the today flag. `NaiveDate` carries
/// no time-of-day or zone, so two entries built from the same year/month/day
/// are always equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateEntry {
    pub date: NaiveDate,
    pub is_today: bool,
}

impl DateEntry {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            is_today: date == today,
        }
    }
}

/// The 15-day span currently materialized for display
///
/// Always exactly [`WINDOW_SIZE`] contiguous, strictly increasing days, with
/// the center date at [`WINDOW_CENTER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    entries: [DateEntry; WINDOW_SIZE],
    generated_on: NaiveDate,
}

impl Window {
    pub(crate) fn from_parts(entries: [DateEntry; WINDOW_SIZE], generated_on: NaiveDate) -> Self {
        Self {
            entries,
            generated_on,
        }
    }

    pub fn entries(&self) -> &[DateEntry; WINDOW_SIZE] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DateEntry> {
        self.entries.get(index)
    }

    pub const fn len(&self) -> usize {
        WINDOW_SIZE
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn center(&self) -> NaiveDate {
        self.entries[WINDOW_CENTER].date
    }

    pub fn first(&self) -> NaiveDate {
        self.entries[0].date
    }

    pub fn last(&self) -> NaiveDate {
        self.entries[WINDOW_SIZE - 1].date
    }

    /// Position of `date` in the window, by calendar day
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.entries.iter().position(|entry| entry.date == date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first() <= date && date <= self.last()
    }

    /// Index of the entry flagged as today, if today falls in the span
    pub fn today_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_today)
    }

    /// The "today" this window's flags were computed against
    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = &'a DateEntry;
    type IntoIter = std::slice::Iter<'a, DateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Highlight applied to a day in the calendar overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayMarking {
    /// The currently selected day (filled)
    Selected,
    /// Today, when it is not also the selection (dot)
    TodayDot,
}
