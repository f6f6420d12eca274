use tracing::{debug, info};

use crate::calendar::day_key;
use crate::formatting::format_long_date;
use crate::greeting::Greeting;

use super::action::Action;
use super::effects::Effect;
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes the current state and an action, returns the new state and the
/// effect to run. Controller commands come back as effects so the carousel
/// view and the notes pane are only touched by the runtime.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let mut new_state = state;

    let effect = match action {
        Action::SwipeLeft => swipe(&mut new_state, -1),
        Action::SwipeRight => swipe(&mut new_state, 1),

        Action::CarouselSettled(index) => {
            Effect::from_commands(new_state.carousel.on_carousel_settle(index))
        }

        Action::JumpToToday => Effect::from_commands(new_state.carousel.on_jump_to_today()),

        Action::OpenCalendar => {
            new_state.carousel.open_calendar();
            new_state.picker.reset_to(new_state.carousel.selected_date());
            Effect::None
        }

        Action::CloseCalendar => {
            new_state.carousel.close_calendar();
            Effect::None
        }

        Action::PickerMove(movement) => {
            if new_state.carousel.calendar_visible() {
                new_state.picker.apply(movement);
            }
            Effect::None
        }

        Action::PickerConfirm => {
            if new_state.carousel.calendar_visible() {
                Effect::Action(Action::CalendarDayPressed(day_key(new_state.picker.cursor())))
            } else {
                Effect::None
            }
        }

        Action::CalendarDayPressed(day) => match new_state.carousel.on_calendar_day_pressed(&day) {
            Ok(commands) => Effect::from_commands(commands),
            Err(e) => Effect::Action(Action::SetStatusMessage {
                message: e.to_string(),
                is_error: true,
            }),
        },

        Action::DateChanged(date) => {
            info!("Selected day changed to {}", date);
            new_state.notes.day = date;
            new_state.notes.notifications += 1;
            new_state
                .system
                .set_status_message(format!("Showing {}", format_long_date(date)));
            Effect::None
        }

        Action::RefreshGreeting => {
            new_state.greeting = Greeting::from_clock(new_state.carousel.clock());
            new_state.carousel.refresh_today();
            Effect::None
        }

        Action::SetStatusMessage { message, is_error } => {
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            Effect::None
        }

        Action::Quit => Effect::None,
    };

    (new_state, effect)
}

/// Drag the strip one card and settle where it lands
fn swipe(state: &mut AppState, delta: isize) -> Effect {
    match state.carousel_view.swipe(delta) {
        Some(index) => Effect::Action(Action::CarouselSettled(index)),
        None => {
            debug!("CAROUSEL: Swipe past the window edge ignored");
            Effect::None
        }
    }
}
