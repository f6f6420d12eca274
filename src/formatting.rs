use chrono::{Datelike, NaiveDate};

use crate::config::DisplayConfig;

/// Box-drawing characters for card and header borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub selector: String,
    pub dot: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            selector: "►".to_string(),
            dot: "•".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            selector: ">".to_string(),
            dot: "*".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Labels printed on a carousel card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLabels {
    pub month: &'static str,
    pub day_name: &'static str,
    pub day_num: String,
}

/// Compact month / day-number / weekday labels for a carousel card
pub fn format_date_compact(date: NaiveDate) -> CardLabels {
    CardLabels {
        month: MONTH_NAMES[date.month0() as usize],
        day_name: DAY_NAMES[date.weekday().num_days_from_sunday() as usize],
        day_num: date.day().to_string(),
    }
}

/// Two-letter weekday headings for a Sunday-first month grid
pub fn weekday_headings() -> [&'static str; 7] {
    ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
}

/// "Wednesday, January 10, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "January 2024"
pub fn format_month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_compact() {
        let labels = format_date_compact(day(2024, 1, 10));
        assert_eq!(labels.month, "Jan");
        assert_eq!(labels.day_name, "Wed");
        assert_eq!(labels.day_num, "10");

        let labels = format_date_compact(day(2024, 12, 1));
        assert_eq!(labels.month, "Dec");
        assert_eq!(labels.day_name, "Sun");
        assert_eq!(labels.day_num, "1");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(day(2024, 1, 10)), "Wednesday, January 10, 2024");
        assert_eq!(format_month_title(day(2024, 3, 1)), "March 2024");
    }

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig { use_unicode: true, ..Default::default() };
        let result = format_header("Test Header", false, &display);
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Window", true, &display);
        assert_eq!(result, "Window\n======\n");
    }

    #[test]
    fn test_empty_header() {
        let display = DisplayConfig::default();
        assert_eq!(format_header("", false, &display), "\n\n");
    }
}
