use thiserror::Error;

/// Errors raised at the calendar boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid day string '{0}': expected YYYY-MM-DD")]
    InvalidDayString(String),
}

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;
