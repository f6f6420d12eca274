/// Keyboard event to action mapping
///
/// The carousel takes Left/Right as one-card swipes. While the calendar
/// overlay is open every key goes to the picker instead.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, trace};

use super::action::{Action, PickerMove};
use super::state::AppState;

/// Handle global keys that work regardless of overlay state
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Handle keys while the calendar overlay is open
fn handle_calendar_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Esc => {
            debug!("KEY: ESC pressed in calendar - closing overlay");
            Some(Action::CloseCalendar)
        }
        KeyCode::Enter => Some(Action::PickerConfirm),
        KeyCode::Left => Some(Action::PickerMove(PickerMove::Days(-1))),
        KeyCode::Right => Some(Action::PickerMove(PickerMove::Days(1))),
        KeyCode::Up => Some(Action::PickerMove(PickerMove::Days(-7))),
        KeyCode::Down => Some(Action::PickerMove(PickerMove::Days(7))),
        KeyCode::PageUp => Some(Action::PickerMove(PickerMove::Months(-1))),
        KeyCode::PageDown => Some(Action::PickerMove(PickerMove::Months(1))),
        _ => None,
    }
}

/// Handle keys on the carousel screen
fn handle_carousel_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    match key_code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SwipeLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SwipeRight),
        KeyCode::Char('c') => Some(Action::OpenCalendar),
        // The shortcut only exists while another day is selected
        KeyCode::Char('t') if state.carousel.shows_today_shortcut() => Some(Action::JumpToToday),
        _ => None,
    }
}

/// Convert a key event to an action
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    trace!("KEY: {:?}", key.code);

    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    if state.carousel.calendar_visible() {
        return handle_calendar_keys(key.code);
    }

    handle_carousel_keys(key.code, state)
}
