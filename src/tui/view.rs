//! Builds the journal screen from `AppState`.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::types::DateEntry;

use super::state::AppState;
use super::widgets::{
    CalendarWidget, CarouselWidget, HeaderWidget, NotesWidget, RenderableWidget, ShortcutBar,
    StatusBarWidget,
};

/// Calculated areas for each part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub shortcuts: Rect,
    pub carousel: Rect,
    pub notes: Rect,
    pub status_bar: Rect,
}

impl ScreenAreas {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(super::widgets::carousel::CARD_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            shortcuts: chunks[2],
            carousel: chunks[3],
            notes: chunks[4],
            status_bar: chunks[5],
        }
    }
}

fn status_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    if state.carousel.calendar_visible() {
        vec![("←↑↓→", "Move"), ("PgUp/PgDn", "Month"), ("Enter", "Select"), ("Esc", "Close")]
    } else {
        vec![("←→", "Swipe"), ("c", "Calendar"), ("q", "Quit")]
    }
}

/// Render the whole screen, calendar overlay last so it sits on top
pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) {
    let config = &state.system.config.display;
    let areas = ScreenAreas::calculate(area);

    HeaderWidget {
        headline: state.headline(),
    }
    .render(areas.header, buf, config);

    ShortcutBar {
        show_today: state.carousel.shows_today_shortcut(),
    }
    .render(areas.shortcuts, buf, config);

    CarouselWidget {
        entries: state.carousel.window().iter().copied().collect::<Vec<DateEntry>>(),
        selected_index: state.carousel.current_index(),
        position: state.carousel_view.position,
        visible_cards: state.system.config.visible_cards,
    }
    .render(areas.carousel, buf, config);

    NotesWidget {
        day: state.notes.day,
        is_today: state.notes.day == state.carousel.today(),
    }
    .render(areas.notes, buf, config);

    StatusBarWidget {
        message: state.system.status_message.clone(),
        is_error: state.system.status_is_error,
        hints: status_hints(state),
    }
    .render(areas.status_bar, buf, config);

    if state.carousel.calendar_visible() {
        CalendarWidget {
            cursor: state.picker.cursor(),
            weeks: state.picker.visible_month(),
            marks: state.carousel.marked_dates(),
        }
        .render(area, buf, config);
    }
}
