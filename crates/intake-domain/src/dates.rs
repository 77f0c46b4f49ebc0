//! Date helpers
//!
//! Form inputs carry ISO dates (`2026-10-16`) and `HH:MM` times. Records store
//! dates the way US store staff read them: `10/16/2026`.

use chrono::{Datelike, Days, Local, NaiveDate, NaiveTime};

/// Turnaround used for a design request ETA when no due date is given
pub const DEFAULT_TURNAROUND_DAYS: u64 = 7;

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `M/D/YYYY` without zero padding
pub fn format_us(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Convert a form date to display form, or `""` when blank or unparseable
pub fn display_input_date(value: &str) -> String {
    parse_input_date(value).map(format_us).unwrap_or_default()
}

pub fn parse_input_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// True when both times parse and `end` is strictly later than `start`
pub fn end_after_start(start: &str, end: &str) -> bool {
    match (parse_input_time(start), parse_input_time(end)) {
        (Some(s), Some(e)) => e > s,
        _ => false,
    }
}

/// The requested due date, or today plus the default turnaround
pub fn compute_eta(needed_by: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    needed_by.unwrap_or_else(|| {
        today
            .checked_add_days(Days::new(DEFAULT_TURNAROUND_DAYS))
            .unwrap_or(today)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_us_has_no_padding() {
        assert_eq!(format_us(date(2026, 3, 5)), "3/5/2026");
        assert_eq!(format_us(date(2026, 12, 31)), "12/31/2026");
    }

    #[test]
    fn test_display_input_date() {
        assert_eq!(display_input_date("2026-10-20"), "10/20/2026");
        assert_eq!(display_input_date(""), "");
        assert_eq!(display_input_date("next week"), "");
    }

    #[test]
    fn test_eta_defaults_to_one_week() {
        assert_eq!(compute_eta(None, date(2026, 12, 28)), date(2027, 1, 4));
        assert_eq!(compute_eta(Some(date(2026, 11, 1)), date(2026, 10, 16)), date(2026, 11, 1));
    }

    #[test]
    fn test_end_after_start() {
        assert!(end_after_start("09:00", "21:30"));
        assert!(!end_after_start("21:00", "09:00"));
        assert!(!end_after_start("10:00", "10:00"));
        assert!(!end_after_start("", "10:00"));
    }
}
