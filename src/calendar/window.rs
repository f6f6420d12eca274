use chrono::{Days, NaiveDate};

use crate::clock::Clock;
use crate::types::{DateEntry, Window, WINDOW_RADIUS};

/// Build the 15-day window centered on `center`
///
/// Entries run from `center - 7` to `center + 7` inclusive. An entry is
/// flagged as today iff it equals `today`. Centers within seven days of the
/// representable range are pulled inward so every entry exists.
pub fn generate_window(center: NaiveDate, today: NaiveDate) -> Window {
    let center = clamp_center(center);
    let entries = std::array::from_fn(|i| {
        let offset = i as i64 - WINDOW_RADIUS;
        DateEntry::new(offset_day(center, offset), today)
    });
    Window::from_parts(entries, today)
}

/// Build the window using a single reading of `clock`
pub fn generate_window_with(center: NaiveDate, clock: &impl Clock) -> Window {
    generate_window(center, clock.today())
}

/// Pull `date` inward so the whole window around it is representable
pub fn clamp_center(date: NaiveDate) -> NaiveDate {
    let radius = Days::new(WINDOW_RADIUS as u64);
    let lowest = NaiveDate::MIN.checked_add_days(radius).unwrap_or(NaiveDate::MIN);
    let highest = NaiveDate::MAX.checked_sub_days(radius).unwrap_or(NaiveDate::MAX);
    date.clamp(lowest, highest)
}

fn offset_day(date: NaiveDate, offset: i64) -> NaiveDate {
    let shifted = if offset >= 0 {
        date.checked_add_days(Days::new(offset as u64))
    } else {
        date.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::types::{WINDOW_CENTER, WINDOW_SIZE};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_has_fifteen_contiguous_days() {
        let centers = [
            day(2024, 6, 15),
            day(2024, 1, 1),
            day(2024, 2, 29),
            day(2023, 12, 28),
            day(1999, 3, 3),
        ];
        for center in centers {
            let window = generate_window(center, day(2024, 6, 15));
            assert_eq!(window.entries().len(), WINDOW_SIZE);
            assert_eq!(window.center(), center);
            assert_eq!(window.entries()[WINDOW_CENTER].date, center);
            for pair in window.entries().windows(2) {
                assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            }
        }
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let window = generate_window(day(2024, 1, 3), day(2024, 1, 3));
        assert_eq!(window.first(), day(2023, 12, 27));
        assert_eq!(window.last(), day(2024, 1, 10));
    }

    #[test]
    fn test_today_flag_is_unique_when_in_span() {
        let today = day(2024, 6, 18);
        let window = generate_window(day(2024, 6, 15), today);
        let flagged: Vec<_> = window.iter().filter(|e| e.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, today);
        assert_eq!(window.today_index(), Some(10));
    }

    #[test]
    fn test_today_flag_absent_when_outside_span() {
        let window = generate_window(day(2024, 6, 15), day(2024, 6, 23));
        assert!(window.iter().all(|e| !e.is_today));
        assert_eq!(window.today_index(), None);

        let window = generate_window(day(2024, 6, 15), day(2024, 6, 22));
        assert_eq!(window.today_index(), Some(WINDOW_SIZE - 1));
    }

    #[test]
    fn test_generate_with_clock_reads_today_once() {
        let clock = FixedClock::at(day(2024, 1, 20), 23, 59);
        let window = generate_window_with(day(2024, 1, 20), &clock);
        assert_eq!(window.generated_on(), day(2024, 1, 20));
        assert_eq!(window.today_index(), Some(WINDOW_CENTER));
    }

    #[test]
    fn test_position_of_and_contains() {
        let window = generate_window(day(2024, 6, 15), day(2024, 6, 15));
        assert_eq!(window.position_of(day(2024, 6, 8)), Some(0));
        assert_eq!(window.position_of(day(2024, 6, 22)), Some(14));
        assert_eq!(window.position_of(day(2024, 6, 23)), None);
        assert!(window.contains(day(2024, 6, 22)));
        assert!(!window.contains(day(2024, 6, 7)));
    }

    #[test]
    fn test_extreme_centers_are_clamped() {
        let window = generate_window(NaiveDate::MAX, day(2024, 1, 1));
        assert_eq!(window.last(), NaiveDate::MAX);
        assert_eq!(window.entries().len(), WINDOW_SIZE);

        let window = generate_window(NaiveDate::MIN, day(2024, 1, 1));
        assert_eq!(window.first(), NaiveDate::MIN);
    }
}
