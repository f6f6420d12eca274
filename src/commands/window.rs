use anyhow::Result;
use chrono::NaiveDate;

use crate::calendar::SelectionController;
use crate::clock::Clock;
use crate::config::DisplayConfig;
use crate::formatting::{format_date_compact, format_header};
use crate::types::WINDOW_CENTER;

use super::{parse_optional_day, resolve_clock};

/// Render the carousel window around the controller's selection as text
pub fn format_window<C: Clock>(controller: &SelectionController<C>, display: &DisplayConfig) -> String {
    let mut output = String::new();
    let title = format!("Date window around {}", controller.center_date());
    output.push_str(&format_header(&title, true, display));

    for (index, entry) in controller.window().iter().enumerate() {
        let labels = format_date_compact(entry.date);
        let selector = if index == controller.current_index() {
            display.box_chars.selector.as_str()
        } else {
            " "
        };
        let mut tags = Vec::new();
        if index == WINDOW_CENTER {
            tags.push("center");
        }
        if entry.is_today {
            tags.push("today");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };
        output.push_str(&format!(
            "{} {:>2}  {}  {} {:>2} {}{}\n",
            selector, index, entry.date, labels.month, labels.day_num, labels.day_name, tags
        ));
    }
    output
}

pub fn run(date: Option<String>, today: Option<String>, display: &DisplayConfig) -> Result<()> {
    let clock = resolve_clock(today.as_deref())?;
    let initial: Option<NaiveDate> = parse_optional_day(date.as_deref())?;
    let controller = SelectionController::initialize(clock, initial);

    print!("{}", format_window(&controller, display));
    if controller.shows_today_shortcut() {
        println!("\nToday is {}, not the selected day", controller.today());
    }
    Ok(())
}
