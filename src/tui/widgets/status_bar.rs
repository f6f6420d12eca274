use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

use super::RenderableWidget;

/// Bottom line: status message on the left, key hints on the right
pub struct StatusBarWidget {
    pub message: Option<String>,
    pub is_error: bool,
    pub hints: Vec<(&'static str, &'static str)>,
}

impl StatusBarWidget {
    pub fn hint_text(&self) -> String {
        self.hints
            .iter()
            .map(|(key, action)| format!("{} {}", key, action))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl RenderableWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }

        let hints = format!("{} ", self.hint_text());
        let hints_width = hints.width() as u16;
        let hints_x = area.x + area.width.saturating_sub(hints_width);
        buf.set_stringn(hints_x, area.y, &hints, area.width as usize, Style::default().fg(Color::DarkGray));

        if let Some(message) = &self.message {
            let (label, style) = if self.is_error {
                (format!(" ERROR: {}", message), Style::default().fg(Color::Red))
            } else {
                (format!(" {}", message), Style::default().fg(config.card_fg))
            };
            let room = hints_x.saturating_sub(area.x + 1) as usize;
            buf.set_stringn(area.x, area.y, &label, room, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
