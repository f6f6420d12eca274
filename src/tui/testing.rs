//! Shared helpers for screen and widget tests.

use std::sync::Arc;

use chrono::NaiveDate;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::clock::FixedClock;
use crate::config::{Config, DisplayConfig};

use super::state::AppState;
use super::widgets::RenderableWidget;

/// Screen state whose clock is pinned to midday on `today`
pub fn state_on(today: NaiveDate, initial: Option<NaiveDate>) -> AppState {
    AppState::new(Config::default(), Arc::new(FixedClock::on(today)), initial)
}

/// Render a widget to a fresh buffer with the default display config
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let config = DisplayConfig::default();
    widget.render(buf.area, &mut buf, &config);
    buf
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
