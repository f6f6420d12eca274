use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::formatting::format_date_compact;
use crate::types::{DateEntry, WINDOW_SIZE};

use super::{fill_style, set_centered, RenderableWidget};

/// Width of one date card including its border
pub const CARD_WIDTH: u16 = 9;

/// Columns between cards
pub const CARD_GAP: u16 = 1;

/// Rows of one date card including its border
pub const CARD_HEIGHT: u16 = 5;

/// Horizontal strip of date cards
///
/// Draws up to `visible_cards` cards around the scroll `position`. The card
/// at `selected_index` is filled with the accent; today's card gets an accent
/// border and text.
pub struct CarouselWidget {
    pub entries: Vec<DateEntry>,
    pub selected_index: usize,
    pub position: usize,
    pub visible_cards: u16,
}

impl CarouselWidget {
    /// First window index drawn on screen
    pub fn first_visible(&self, cards: usize) -> usize {
        let len = self.entries.len().min(WINDOW_SIZE);
        let cards = cards.clamp(1, len.max(1));
        let half = cards / 2;
        self.position.saturating_sub(half).min(len.saturating_sub(cards))
    }

    fn cards_that_fit(&self, width: u16) -> usize {
        let fit = (width + CARD_GAP) / (CARD_WIDTH + CARD_GAP);
        usize::from(fit.min(self.visible_cards).max(1))
    }

    fn render_card(&self, entry: &DateEntry, selected: bool, x: u16, y: u16, buf: &mut Buffer, config: &DisplayConfig) {
        let chars = &config.box_chars;
        let inner = CARD_WIDTH - 2;

        let mut border_style = Style::default().fg(config.muted_accent());
        let mut text_style = Style::default().fg(config.card_fg);
        if entry.is_today {
            border_style = Style::default().fg(config.today_fg());
            text_style = Style::default().fg(config.today_fg()).add_modifier(Modifier::BOLD);
        }
        if selected {
            border_style = Style::default().fg(config.card_fg);
            text_style = Style::default()
                .fg(config.card_fg)
                .bg(config.accent)
                .add_modifier(Modifier::BOLD);
        }

        let horizontal = chars.horizontal.repeat(inner as usize);
        buf.set_string(x, y, format!("{}{}{}", chars.top_left, horizontal, chars.top_right), border_style);
        buf.set_string(
            x,
            y + CARD_HEIGHT - 1,
            format!("{}{}{}", chars.bottom_left, horizontal, chars.bottom_right),
            border_style,
        );
        for row in 1..CARD_HEIGHT - 1 {
            buf.set_string(x, y + row, &chars.vertical, border_style);
            buf.set_string(x + CARD_WIDTH - 1, y + row, &chars.vertical, border_style);
        }

        if selected {
            fill_style(buf, Rect::new(x + 1, y + 1, inner, CARD_HEIGHT - 2), text_style);
        }

        let labels = format_date_compact(entry.date);
        set_centered(buf, x + 1, y + 1, inner, labels.month, text_style);
        set_centered(buf, x + 1, y + 2, inner, &labels.day_num, text_style);
        set_centered(buf, x + 1, y + 3, inner, labels.day_name, text_style);
    }
}

impl RenderableWidget for CarouselWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < CARD_HEIGHT || area.width < CARD_WIDTH || self.entries.is_empty() {
            return;
        }

        let cards = self.cards_that_fit(area.width).min(self.entries.len());
        let first = self.first_visible(cards);
        let strip_width = cards as u16 * CARD_WIDTH + (cards as u16 - 1) * CARD_GAP;
        let left = area.x + area.width.saturating_sub(strip_width) / 2;

        for (slot, index) in (first..first + cards).enumerate() {
            let x = left + slot as u16 * (CARD_WIDTH + CARD_GAP);
            self.render_card(&self.entries[index], index == self.selected_index, x, area.y, buf, config);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(CARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::generate_window;
    use crate::tui::testing::{assert_buffer, render_widget};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn widget(position: usize, visible_cards: u16) -> CarouselWidget {
        let window = generate_window(day(2024, 6, 15), day(2024, 6, 15));
        CarouselWidget {
            entries: window.entries().to_vec(),
            selected_index: position,
            position,
            visible_cards,
        }
    }

    #[test]
    fn test_first_visible_centers_on_position() {
        assert_eq!(widget(7, 5).first_visible(5), 5);
        assert_eq!(widget(0, 5).first_visible(5), 0);
        assert_eq!(widget(1, 5).first_visible(5), 0);
        assert_eq!(widget(14, 5).first_visible(5), 10);
        assert_eq!(widget(13, 5).first_visible(5), 10);
    }

    #[test]
    fn test_renders_three_cards_around_center() {
        let buf = render_widget(&widget(7, 3), 29, 5);
        assert_buffer(
            &buf,
            &[
                "╭───────╮ ╭───────╮ ╭───────╮",
                "│  Jun  │ │  Jun  │ │  Jun  │",
                "│  14   │ │  15   │ │  16   │",
                "│  Fri  │ │  Sat  │ │  Sun  │",
                "╰───────╯ ╰───────╯ ╰───────╯",
            ],
        );
    }

    #[test]
    fn test_narrow_area_shows_fewer_cards() {
        let buf = render_widget(&widget(7, 5), 9, 5);
        assert_buffer(
            &buf,
            &[
                "╭───────╮",
                "│  Jun  │",
                "│  15   │",
                "│  Sat  │",
                "╰───────╯",
            ],
        );
    }

    #[test]
    fn test_selected_card_is_filled() {
        let config = DisplayConfig::default();
        let buf = render_widget(&widget(7, 1), 9, 5);
        assert_eq!(buf[(4, 2)].bg, config.accent);
        assert_eq!(buf[(1, 1)].bg, config.accent);
    }
}
