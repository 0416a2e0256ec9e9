//! Formatting and parsing of the date/time text the user types and reads.
//!
//! ## Accepted input
//!
//! - Dates: `DD/MM/YYYY` (the calendar's display format), `YYYY-MM-DD`, or `today`
//! - Times: `HH:MM`
//! - Months: `YYYY-MM`
//!
//! ## Display
//!
//! Durations render as `HH:MM`. Unlike work-time totals, an appointment duration may
//! legitimately be negative (end before start), so the sign is kept: `-01:00`.

use chrono::{Duration, NaiveDate, NaiveTime};

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DISPLAY_TIME_FORMAT: &str = "%H:%M";

/// Formats a duration as `HH:MM`, prefixed with `-` when negative.
pub fn format_duration(duration: &Duration) -> String {
    let sign = if *duration < Duration::zero() { "-" } else { "" };
    let minutes = duration.num_minutes().abs();
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parses a user-supplied date. `today` resolves against the given date so callers
/// decide what "today" means.
pub fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Some(today);
    }
    NaiveDate::parse_from_str(input, DISPLAY_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .ok()
}

pub fn parse_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), DISPLAY_TIME_FORMAT).ok()
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_month(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn durations_keep_their_sign() {
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::zero()), "00:00");
        assert_eq!(format_duration(&Duration::minutes(-60)), "-01:00");
    }

    #[test]
    fn dates_accept_both_layouts_and_today() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_date("05/03/2024", today()), expected);
        assert_eq!(parse_date("2024-03-05", today()), expected);
        assert_eq!(parse_date("Today", today()), Some(today()));
        assert_eq!(parse_date("31/02/2024", today()), None);
        assert_eq!(parse_date("tomorrow", today()), None);
    }

    #[test]
    fn times_require_hours_and_minutes() {
        assert_eq!(parse_time("10:30"), NaiveTime::from_hms_opt(10, 30, 0));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("10h30"), None);
    }

    #[test]
    fn months_resolve_to_first_day() {
        assert_eq!(parse_month("2024-02"), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(parse_month("2024-13"), None);
    }
}
