use chrono::{Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::calendar::day_key;
use crate::calendar::overlay::Week;
use crate::calendar::MarkedDates;
use crate::config::DisplayConfig;
use crate::formatting::{format_month_title, weekday_headings};
use crate::types::DayMarking;

use super::RenderableWidget;

/// Columns per day cell: two digits, marker, gap
const CELL_WIDTH: u16 = 4;

pub const CALENDAR_WIDTH: u16 = CELL_WIDTH * 7 + 2;

/// Modal month calendar
///
/// Marked days come from the controller; the cursor belongs to the picker.
pub struct CalendarWidget {
    pub cursor: NaiveDate,
    pub weeks: Vec<Week>,
    pub marks: MarkedDates,
}

impl CalendarWidget {
    /// Rectangle the modal occupies when centered in `area`
    pub fn modal_area(&self, area: Rect) -> Rect {
        let height = (self.weeks.len() as u16 + 5).min(area.height);
        let width = CALENDAR_WIDTH.min(area.width);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    /// Style for a day cell and whether it carries the today dot
    fn day_style(&self, date: NaiveDate, config: &DisplayConfig) -> (Style, bool) {
        let mut style = Style::default().fg(config.card_fg);
        let mut dot = false;
        match self.marks.get(&day_key(date)) {
            Some(DayMarking::Selected) => {
                style = style.bg(config.accent).add_modifier(Modifier::BOLD);
            }
            Some(DayMarking::TodayDot) => {
                style = style.fg(config.today_fg());
                dot = true;
            }
            None => {}
        }
        if date == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        (style, dot)
    }
}

impl RenderableWidget for CalendarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let modal = self.modal_area(area);
        if modal.width < CALENDAR_WIDTH || modal.height < 6 {
            return;
        }

        Clear.render(modal, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.accent))
            .title(" Select Date ")
            .title_bottom(" Esc Close · Enter Select ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let title_style = Style::default().fg(config.card_fg).add_modifier(Modifier::BOLD);
        let title = format!("‹ {} ›", format_month_title(self.cursor));
        super::set_centered(buf, inner.x, inner.y, inner.width, &title, title_style);

        let heading_style = Style::default().fg(Color::Gray);
        for (col, heading) in weekday_headings().iter().enumerate() {
            let x = inner.x + col as u16 * CELL_WIDTH;
            buf.set_string(x + 1, inner.y + 2, heading, heading_style);
        }

        for (row, week) in self.weeks.iter().enumerate() {
            let y = inner.y + 3 + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            for (col, date) in week.iter().enumerate() {
                let Some(date) = date else { continue };
                let x = inner.x + col as u16 * CELL_WIDTH;
                let (style, dot) = self.day_style(*date, config);
                buf.set_string(x + 1, y, format!("{:>2}", date.day()), style);
                if dot {
                    buf.set_string(x + 3, y, &config.box_chars.dot, Style::default().fg(config.today_fg()));
                }
            }
        }
    }
}
