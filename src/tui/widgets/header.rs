use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::config::DisplayConfig;

use super::RenderableWidget;

const QUESTION: &str = "What's on your mind?";

/// Greeting line and the journaling prompt
pub struct HeaderWidget {
    pub headline: String,
}

impl RenderableWidget for HeaderWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let headline_style = Style::default().fg(config.card_fg).add_modifier(Modifier::BOLD);
        buf.set_stringn(area.x + 1, area.y, &self.headline, area.width.saturating_sub(1) as usize, headline_style);
        if area.height > 1 {
            buf.set_stringn(
                area.x + 1,
                area.y + 1,
                QUESTION,
                area.width.saturating_sub(1) as usize,
                Style::default().fg(Color::Gray),
            );
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

/// The "Today" and "Calendar" buttons above the strip
pub struct ShortcutBar {
    pub show_today: bool,
}

impl ShortcutBar {
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.show_today {
            labels.push("[t] Today");
        }
        labels.push("[c] Calendar");
        labels
    }
}

impl RenderableWidget for ShortcutBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let text = self.labels().join("  ");
        let style = Style::default().fg(config.accent).add_modifier(Modifier::BOLD);
        super::set_centered(buf, area.x, area.y, area.width, &text, style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
