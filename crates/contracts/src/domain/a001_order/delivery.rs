//! Estimated delivery date shown under the order total.
//!
//! Orders placed before the evening cutoff ship the next day, later orders the
//! day after. Sundays and public holidays are not delivery days.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Hour (24h, local time) from which an order counts as late
pub const CUTOFF_HOUR: u32 = 20;

pub fn estimate_delivery(order_time: NaiveDateTime, holidays: &[NaiveDate]) -> NaiveDate {
    let days_to_add = if order_time.hour() >= CUTOFF_HOUR { 2 } else { 1 };
    let mut date = order_time.date() + Duration::days(days_to_add);
    while date.weekday() == Weekday::Sun || holidays.contains(&date) {
        date += Duration::days(1);
    }
    date
}

/// "Mon, 29 Dec"
pub fn format_delivery(date: NaiveDate) -> String {
    date.format("%a, %d %b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_before_cutoff_is_next_day() {
        // Sunday evening -> Monday
        assert_eq!(estimate_delivery(at(2025, 12, 28, 18, 0), &[]), date(2025, 12, 29));
    }

    #[test]
    fn test_after_cutoff_is_day_after() {
        assert_eq!(estimate_delivery(at(2025, 12, 28, 20, 1), &[]), date(2025, 12, 30));
        assert_eq!(estimate_delivery(at(2025, 12, 28, 20, 0), &[]), date(2025, 12, 30));
    }

    #[test]
    fn test_sunday_is_skipped() {
        // Saturday afternoon would land on Sunday
        assert_eq!(estimate_delivery(at(2025, 12, 27, 10, 0), &[]), date(2025, 12, 29));
    }

    #[test]
    fn test_holidays_are_skipped() {
        let holidays = [date(2025, 12, 29), date(2025, 12, 30)];
        assert_eq!(
            estimate_delivery(at(2025, 12, 28, 9, 0), &holidays),
            date(2025, 12, 31)
        );
    }

    #[test]
    fn test_format_delivery() {
        assert_eq!(format_delivery(date(2025, 12, 29)), "Mon, 29 Dec");
    }
}
