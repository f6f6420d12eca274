use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::formatting::format_long_date;

use super::RenderableWidget;

/// Pane listing the selected day's notes
pub struct NotesWidget {
    pub day: NaiveDate,
    pub is_today: bool,
}

impl RenderableWidget for NotesWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let title = if self.is_today {
            format!(" {} (today) ", format_long_date(self.day))
        } else {
            format!(" {} ", format_long_date(self.day))
        };
        let widget = Paragraph::new("No notes for this day.")
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(config.muted_accent()))
                    .title(title),
            );
        widget.render(area, buf);
    }
}
