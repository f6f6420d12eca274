use std::sync::Arc;

use chrono::NaiveDate;

use crate::calendar::SelectionController;
use crate::clock::{FixedClock, SharedClock};
use crate::config::Config;
use crate::greeting::Greeting;
use crate::types::{WINDOW_CENTER, WINDOW_SIZE};

use super::picker::DayPickerState;

/// Root screen state - single source of truth
///
/// All state changes happen through the reducer.
/// Widgets receive slices of this state when rendering.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Date selection, window and calendar visibility
    pub carousel: SelectionController<SharedClock>,

    /// Where the strip is currently scrolled to
    pub carousel_view: CarouselViewState,

    /// Cursor of the calendar picker
    pub picker: DayPickerState,

    /// Consumer of date-change notifications
    pub notes: NotesState,

    pub greeting: Greeting,

    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config, clock: SharedClock, initial_date: Option<NaiveDate>) -> Self {
        let carousel = SelectionController::initialize(clock, initial_date);
        let selected = carousel.selected_date();
        let greeting = Greeting::from_clock(carousel.clock());
        Self {
            carousel_view: CarouselViewState::new(carousel.current_index()),
            picker: DayPickerState::new(selected),
            notes: NotesState::new(selected),
            greeting,
            system: SystemState {
                config,
                status_message: None,
                status_is_error: false,
            },
            carousel,
        }
    }

    pub fn headline(&self) -> String {
        self.greeting.headline(self.system.config.display_name.as_deref())
    }
}

/// Inert placeholder left behind while the reducer owns the real state
///
/// Pinned to an epoch clock so it never reads the system time or logs.
impl Default for AppState {
    fn default() -> Self {
        let clock: SharedClock = Arc::new(FixedClock::default());
        let carousel = SelectionController::mount(clock, None);
        let selected = carousel.selected_date();
        Self {
            carousel_view: CarouselViewState::default(),
            picker: DayPickerState::new(selected),
            notes: NotesState::new(selected),
            greeting: Greeting::LateNight,
            system: SystemState::default(),
            carousel,
        }
    }
}

/// Scroll position of the carousel strip
///
/// Moves ahead of the controller during a swipe; the controller catches up on
/// settle, and re-centers push it back through `scroll_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselViewState {
    pub position: usize,
    pub last_scroll_animated: bool,
}

impl CarouselViewState {
    pub fn new(position: usize) -> Self {
        Self {
            position: position.min(WINDOW_SIZE - 1),
            last_scroll_animated: false,
        }
    }

    pub fn scroll_to(&mut self, index: usize, animated: bool) {
        self.position = index.min(WINDOW_SIZE - 1);
        self.last_scroll_animated = animated;
    }

    /// Drag one card; returns the resting index, or None at the edge
    pub fn swipe(&mut self, delta: isize) -> Option<usize> {
        let target = self.position.checked_add_signed(delta)?;
        if target >= WINDOW_SIZE {
            return None;
        }
        self.scroll_to(target, true);
        Some(target)
    }
}

impl Default for CarouselViewState {
    fn default() -> Self {
        Self::new(WINDOW_CENTER)
    }
}

/// The notes pane, which follows the selected day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesState {
    pub day: NaiveDate,
    /// Date-change notifications received since mount
    pub notifications: usize,
}

impl NotesState {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day,
            notifications: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }
}
