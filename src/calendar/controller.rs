use chrono::NaiveDate;
use tracing::{debug, warn};

use super::day::parse_day;
use super::overlay::{marked_dates, CalendarOverlay, MarkedDates};
use super::window::{clamp_center, generate_window};
use crate::clock::Clock;
use crate::error::CalendarResult;
use crate::types::{Window, WINDOW_CENTER, WINDOW_SIZE};

/// Instruction emitted by the controller after a state transition
///
/// The rendering layer consumes these; the controller never touches a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the carousel to `index`
    ScrollToIndex { index: usize, animated: bool },
    /// Tell the host the selected day changed
    NotifyDateChange(NaiveDate),
}

/// Owns the carousel selection and keeps it consistent with the window
///
/// Every operation updates the window, index and selection together before
/// returning its commands, so observers never see a stale index against a new
/// window.
#[derive(Clone)]
pub struct SelectionController<C: Clock> {
    clock: C,
    center_date: NaiveDate,
    selected_date: NaiveDate,
    current_index: usize,
    window: Window,
    calendar: CalendarOverlay,
}

impl<C: Clock> std::fmt::Debug for SelectionController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("center_date", &self.center_date)
            .field("selected_date", &self.selected_date)
            .field("current_index", &self.current_index)
            .field("calendar", &self.calendar)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> SelectionController<C> {
    /// Mount the controller on `initial_date`, or today when absent
    pub fn initialize(clock: C, initial_date: Option<NaiveDate>) -> Self {
        let controller = Self::mount(clock, initial_date);
        debug!(
            "CAROUSEL: Initialized on {} (index {})",
            controller.selected_date, controller.current_index
        );
        controller
    }

    /// Same state as `initialize`, without logging
    pub(crate) fn mount(clock: C, initial_date: Option<NaiveDate>) -> Self {
        let today = clock.today();
        let selected = initial_date.unwrap_or(today);
        let center = clamp_center(selected);
        let window = generate_window(center, today);
        let mut controller = Self {
            clock,
            center_date: center,
            selected_date: selected,
            current_index: WINDOW_CENTER,
            window,
            calendar: CalendarOverlay::default(),
        };
        controller.locate_selection();
        controller
    }

    pub fn center_date(&self) -> NaiveDate {
        self.center_date
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Today according to the injected clock, read fresh on every call
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The carousel came to rest on `index` after a user swipe
    ///
    /// Selects the entry at `index` without re-centering, even at the window
    /// edges. Indices outside the window are ignored.
    pub fn on_carousel_settle(&mut self, index: usize) -> Vec<Command> {
        if index >= WINDOW_SIZE {
            warn!("CAROUSEL: Ignoring settle on out-of-range index {}", index);
            return Vec::new();
        }

        self.refresh_today();
        self.current_index = index;
        self.selected_date = self.window.entries()[index].date;
        debug!("CAROUSEL: Settled on index {} ({})", index, self.selected_date);

        vec![Command::NotifyDateChange(self.selected_date)]
    }

    /// The user picked `date` in the calendar overlay
    ///
    /// Re-centers the window on `date`, snaps the carousel to the center
    /// without animation and closes the overlay.
    pub fn on_calendar_select(&mut self, date: NaiveDate) -> Vec<Command> {
        self.recenter(clamp_center(date));
        self.selected_date = date;
        self.locate_selection();
        self.calendar.close();
        debug!(
            "CAROUSEL: Calendar selected {} (index {})",
            self.selected_date, self.current_index
        );

        vec![
            Command::ScrollToIndex {
                index: self.current_index,
                animated: false,
            },
            Command::NotifyDateChange(self.selected_date),
        ]
    }

    /// The overlay reported a `YYYY-MM-DD` day press
    ///
    /// Leaves the state untouched when the string is not a valid day.
    pub fn on_calendar_day_pressed(&mut self, day: &str) -> CalendarResult<Vec<Command>> {
        let date = parse_day(day)?;
        Ok(self.on_calendar_select(date))
    }

    /// Jump back to today, exactly as if today were picked in the calendar
    pub fn on_jump_to_today(&mut self) -> Vec<Command> {
        let today = self.clock.today();
        debug!("CAROUSEL: Jumping to today ({})", today);
        self.on_calendar_select(today)
    }

    /// Whether the "Today" shortcut should be offered
    pub fn shows_today_shortcut(&self) -> bool {
        self.selected_date != self.clock.today()
    }

    /// Markings for the calendar overlay
    pub fn marked_dates(&self) -> MarkedDates {
        marked_dates(self.selected_date, self.clock.today())
    }

    pub fn calendar_visible(&self) -> bool {
        self.calendar.is_visible()
    }

    pub fn open_calendar(&mut self) {
        debug!("CAROUSEL: Opening calendar");
        self.calendar.open();
    }

    pub fn close_calendar(&mut self) {
        debug!("CAROUSEL: Closing calendar");
        self.calendar.close();
    }

    /// Regenerate the window when the center moves or the day rolled over
    fn recenter(&mut self, center: NaiveDate) {
        let today = self.clock.today();
        if center != self.center_date || today != self.window.generated_on() {
            debug!("CAROUSEL: Regenerating window around {}", center);
            self.center_date = center;
            self.window = generate_window(center, today);
        }
    }

    /// Re-read today and re-flag the window if the day rolled over
    ///
    /// Keeps the center, selection and index; the window's dates don't move.
    pub fn refresh_today(&mut self) {
        self.recenter(self.center_date);
    }

    /// Point `current_index` at the selection, falling back to the center
    fn locate_selection(&mut self) {
        self.current_index = match self.window.position_of(self.selected_date) {
            Some(index) => index,
            None => {
                debug!(
                    "CAROUSEL: {} not in window, falling back to center",
                    self.selected_date
                );
                WINDOW_CENTER
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::types::DayMarking;
    use std::cell::Cell;
    use std::rc::Rc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller_on(today: NaiveDate, initial: Option<NaiveDate>) -> SelectionController<FixedClock> {
        SelectionController::initialize(FixedClock::on(today), initial)
    }

    fn assert_consistent<C: Clock>(controller: &SelectionController<C>) {
        assert_eq!(
            controller.window().entries()[controller.current_index()].date,
            controller.selected_date()
        );
        assert_eq!(controller.window().center(), controller.center_date());
    }

    /// Clock whose day can be advanced from the test
    #[derive(Clone)]
    struct SteppingClock(Rc<Cell<NaiveDate>>);

    impl Clock for SteppingClock {
        fn now(&self) -> chrono::NaiveDateTime {
            self.0.get().and_hms_opt(9, 0, 0).unwrap()
        }
    }

    #[test]
    fn test_initialize_defaults_to_today() {
        let today = day(2024, 6, 15);
        let controller = controller_on(today, None);
        assert_eq!(controller.center_date(), today);
        assert_eq!(controller.selected_date(), today);
        assert_eq!(controller.current_index(), WINDOW_CENTER);
        assert!(!controller.shows_today_shortcut());
        assert!(!controller.calendar_visible());
        assert_consistent(&controller);
    }

    #[test]
    fn test_initialize_centers_on_initial_date() {
        let controller = controller_on(day(2024, 1, 20), Some(day(2024, 1, 10)));
        assert_eq!(controller.center_date(), day(2024, 1, 10));
        assert_eq!(controller.selected_date(), day(2024, 1, 10));
        assert_eq!(controller.current_index(), WINDOW_CENTER);
        assert!(controller.shows_today_shortcut());
    }

    #[test]
    fn test_settle_within_window_does_not_recenter() {
        let mut controller = controller_on(day(2024, 6, 15), Some(day(2024, 6, 15)));
        let commands = controller.on_carousel_settle(10);

        assert_eq!(controller.selected_date(), day(2024, 6, 18));
        assert_eq!(controller.center_date(), day(2024, 6, 15));
        assert_eq!(controller.current_index(), 10);
        assert_eq!(commands, vec![Command::NotifyDateChange(day(2024, 6, 18))]);
        assert_consistent(&controller);
    }

    #[test]
    fn test_settle_at_edges_keeps_window() {
        let mut controller = controller_on(day(2024, 6, 15), None);
        controller.on_carousel_settle(0);
        assert_eq!(controller.selected_date(), day(2024, 6, 8));
        controller.on_carousel_settle(14);
        assert_eq!(controller.selected_date(), day(2024, 6, 22));
        assert_eq!(controller.center_date(), day(2024, 6, 15));
        assert_consistent(&controller);
    }

    #[test]
    fn test_settle_out_of_range_is_ignored() {
        let mut controller = controller_on(day(2024, 6, 15), None);
        controller.on_carousel_settle(3);
        let commands = controller.on_carousel_settle(WINDOW_SIZE);
        assert!(commands.is_empty());
        assert_eq!(controller.current_index(), 3);
        assert_eq!(controller.selected_date(), day(2024, 6, 11));
    }

    #[test]
    fn test_calendar_select_far_away_recenters() {
        let mut controller = controller_on(day(2024, 6, 15), None);
        controller.open_calendar();
        let target = day(2024, 9, 1);
        let commands = controller.on_calendar_select(target);

        assert_eq!(controller.center_date(), target);
        assert_eq!(controller.selected_date(), target);
        assert_eq!(controller.current_index(), WINDOW_CENTER);
        assert_eq!(controller.window().first(), day(2024, 8, 25));
        assert_eq!(controller.window().last(), day(2024, 9, 8));
        assert!(!controller.calendar_visible());
        assert_eq!(
            commands,
            vec![
                Command::ScrollToIndex {
                    index: WINDOW_CENTER,
                    animated: false
                },
                Command::NotifyDateChange(target),
            ]
        );
    }

    #[test]
    fn test_calendar_select_current_center_after_swipe_resets_index() {
        let mut controller = controller_on(day(2024, 6, 15), None);
        controller.on_carousel_settle(12);
        controller.on_calendar_select(day(2024, 6, 15));
        assert_eq!(controller.current_index(), WINDOW_CENTER);
        assert_consistent(&controller);
    }

    #[test]
    fn test_calendar_day_pressed_parses_string() {
        let mut controller = controller_on(day(2024, 6, 15), None);
        let commands = controller.on_calendar_day_pressed("2024-03-01").unwrap();
        assert_eq!(controller.selected_date(), day(2024, 3, 1));
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn test_calendar_day_pressed_invalid_leaves_state() {
        let mut controller = controller_on(day(2024, 6, 15), None);
        controller.open_calendar();
        assert!(controller.on_calendar_day_pressed("2024-13-01").is_err());
        assert_eq!(controller.selected_date(), day(2024, 6, 15));
        assert!(controller.calendar_visible());
    }

    #[test]
    fn test_jump_to_today_end_to_end() {
        let today = day(2024, 1, 20);
        let mut controller = controller_on(today, Some(day(2024, 1, 10)));
        assert!(controller.shows_today_shortcut());

        let commands = controller.on_jump_to_today();

        assert_eq!(controller.center_date(), today);
        assert_eq!(controller.selected_date(), today);
        assert_eq!(controller.current_index(), WINDOW_CENTER);
        assert!(!controller.shows_today_shortcut());
        assert_eq!(commands.last(), Some(&Command::NotifyDateChange(today)));
        assert_eq!(controller.window().today_index(), Some(WINDOW_CENTER));
    }

    #[test]
    fn test_marked_dates_follow_selection() {
        let today = day(2024, 1, 20);
        let mut controller = controller_on(today, None);
        assert_eq!(controller.marked_dates().len(), 1);

        controller.on_carousel_settle(5);
        let marks = controller.marked_dates();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks.get("2024-01-18"), Some(&DayMarking::Selected));
        assert_eq!(marks.get("2024-01-20"), Some(&DayMarking::TodayDot));
    }

    #[test]
    fn test_index_invariant_holds_over_event_sequence() {
        let mut controller = controller_on(day(2024, 6, 15), None);
        let events: [&dyn Fn(&mut SelectionController<FixedClock>); 8] = [
            &|c| {
                c.on_carousel_settle(0);
            },
            &|c| {
                c.on_calendar_select(day(2025, 2, 28));
            },
            &|c| {
                c.on_carousel_settle(14);
            },
            &|c| {
                c.on_jump_to_today();
            },
            &|c| {
                c.on_carousel_settle(9);
            },
            &|c| {
                c.on_calendar_select(day(2024, 6, 20));
            },
            &|c| {
                c.on_carousel_settle(1);
            },
            &|c| {
                c.on_jump_to_today();
            },
        ];
        for event in events {
            event(&mut controller);
            assert_consistent(&controller);
        }
    }

    #[test]
    fn test_today_flags_follow_midnight_rollover() {
        let cell = Rc::new(Cell::new(day(2024, 6, 15)));
        let mut controller = SelectionController::initialize(SteppingClock(cell.clone()), None);
        assert_eq!(controller.window().today_index(), Some(7));

        cell.set(day(2024, 6, 16));
        controller.on_carousel_settle(7);

        assert_eq!(controller.center_date(), day(2024, 6, 15));
        assert_eq!(controller.window().today_index(), Some(8));
        assert!(controller.shows_today_shortcut());
        assert_consistent(&controller);
    }

    #[test]
    fn test_refresh_today_reflags_idle_window() {
        let cell = Rc::new(Cell::new(day(2024, 6, 15)));
        let mut controller = SelectionController::initialize(SteppingClock(cell.clone()), None);

        cell.set(day(2024, 6, 16));
        controller.refresh_today();

        assert_eq!(controller.window().today_index(), Some(8));
        assert_eq!(controller.selected_date(), day(2024, 6, 15));
        assert_eq!(controller.current_index(), WINDOW_CENTER);
        assert_eq!(controller.window().generated_on(), day(2024, 6, 16));
        assert_consistent(&controller);
    }

    #[test]
    fn test_calendar_select_near_max_keeps_picked_day() {
        let mut controller = controller_on(day(2024, 6, 15), None);
        let picked = NaiveDate::MAX.pred_opt().unwrap();
        let commands = controller.on_calendar_select(picked);

        assert_eq!(controller.selected_date(), picked);
        assert_eq!(controller.center_date(), clamp_center(picked));
        assert_eq!(controller.current_index(), WINDOW_SIZE - 2);
        assert_eq!(
            commands,
            vec![
                Command::ScrollToIndex { index: WINDOW_SIZE - 2, animated: false },
                Command::NotifyDateChange(picked),
            ]
        );
        assert_consistent(&controller);
    }

    #[test]
    fn test_initialize_near_min_keeps_initial_day() {
        let controller = controller_on(day(2024, 6, 15), Some(NaiveDate::MIN));
        assert_eq!(controller.selected_date(), NaiveDate::MIN);
        assert_eq!(controller.current_index(), 0);
        assert_consistent(&controller);
    }
}
