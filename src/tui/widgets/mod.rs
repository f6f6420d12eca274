/// Widget-based rendering for the journal screen
///
/// Widgets render themselves directly to a ratatui Buffer from plain values
/// copied out of `AppState`, which keeps them testable without a terminal.

pub mod calendar;
pub use calendar::CalendarWidget;

pub mod carousel;
pub use carousel::CarouselWidget;

pub mod header;
pub use header::{HeaderWidget, ShortcutBar};

pub mod notes;
pub use notes::NotesWidget;

pub mod status_bar;
pub use status_bar::StatusBarWidget;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

/// Write `text` centered within `width` columns starting at (x, y)
pub(crate) fn set_centered(buf: &mut Buffer, x: u16, y: u16, width: u16, text: &str, style: Style) {
    let text_width = text.width() as u16;
    let offset = width.saturating_sub(text_width) / 2;
    buf.set_stringn(x + offset, y, text, width as usize, style);
}

/// Fill `area` with `style`, keeping existing symbols
pub(crate) fn fill_style(buf: &mut Buffer, area: Rect, style: Style) {
    buf.set_style(area, style);
}
