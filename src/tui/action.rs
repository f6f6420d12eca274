use chrono::NaiveDate;

/// Cursor movement inside the calendar picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMove {
    Days(i64),
    Months(i32),
}

/// Global actions - like Redux actions
///
/// All state changes in the screen happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (controller commands, the greeting refresher)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Carousel
    SwipeLeft,
    SwipeRight,
    /// The strip came to rest on an index after user input
    CarouselSettled(usize),
    JumpToToday,

    // Calendar overlay
    OpenCalendar,
    CloseCalendar,
    PickerMove(PickerMove),
    PickerConfirm,
    /// Day-string reported by the picker, `YYYY-MM-DD`
    CalendarDayPressed(String),

    /// Host notification: the selected day changed
    DateChanged(NaiveDate),

    // System actions
    /// Periodic tick: re-read the clock for the greeting and today flags
    RefreshGreeting,
    SetStatusMessage { message: String, is_error: bool },
    Quit,
}
