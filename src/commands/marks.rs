use anyhow::Result;

use crate::calendar::{MarkedDates, SelectionController};
use crate::types::DayMarking;

use super::{parse_optional_day, resolve_clock};

pub fn format_marks(marks: &MarkedDates) -> String {
    let mut output = String::new();
    for (day, marking) in marks {
        let label = match marking {
            DayMarking::Selected => "selected",
            DayMarking::TodayDot => "today (dot)",
        };
        output.push_str(&format!("{}  {}\n", day, label));
    }
    output
}

pub fn run(date: Option<String>, today: Option<String>) -> Result<()> {
    let clock = resolve_clock(today.as_deref())?;
    let initial = parse_optional_day(date.as_deref())?;
    let controller = SelectionController::initialize(clock, initial);

    print!("{}", format_marks(&controller.marked_dates()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::marked_dates;
    use chrono::NaiveDate;

    #[test]
    fn test_format_marks_is_sorted_by_day() {
        let marks = marked_dates(
            NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        );
        assert_eq!(format_marks(&marks), "2024-01-20  today (dot)\n2024-01-25  selected\n");
    }
}
