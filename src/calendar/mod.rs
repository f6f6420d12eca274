//! Date carousel core: window generation, selection reconciliation and the
//! calendar overlay it syncs with.

pub mod controller;
pub mod day;
pub mod overlay;
pub mod window;

pub use controller::{Command, SelectionController};
pub use day::{day_key, parse_day};
pub use overlay::{marked_dates, month_grid, shift_month, CalendarOverlay, MarkedDates};
pub use window::{generate_window, generate_window_with};
