//! Utilities for date and time formatting
//!
//! Timestamps travel as UTC and are shown in the browser's local time.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// `DD.MM.YYYY`
pub fn format_naive_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `DD.MM.YYYY HH:MM` in local time
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    format_timestamp_in(at, &Local)
}

fn format_timestamp_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%d.%m.%Y %H:%M").to_string()
}

/// Value for `<input type="datetime-local">`
pub fn to_datetime_input(at: &DateTime<Utc>) -> String {
    to_datetime_input_in(at, &Local)
}

fn to_datetime_input_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%Y-%m-%dT%H:%M").to_string()
}

/// Reads a `datetime-local` value (seconds optional) as local time.
pub fn parse_datetime_input(value: &str) -> Option<DateTime<Utc>> {
    parse_datetime_input_in(value, &Local)
}

fn parse_datetime_input_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Value for `<input type="date">`
pub fn to_date_input(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_naive_date() {
        assert_eq!(
            format_naive_date(&NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            "02.01.2024"
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(parse_datetime_input_in("mañana", &Utc), None);
        assert_eq!(parse_date_input("2024-02-30"), None);
        assert_eq!(parse_date_input(" 2024-02-29 "), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_datetime_input_round_trip_with_offset() {
        let tz = FixedOffset::west_opt(6 * 3600).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 6, 3, 13, 30, 0).unwrap();
        assert_eq!(to_datetime_input_in(&at, &tz), "2024-06-03T07:30");
        assert_eq!(parse_datetime_input_in("2024-06-03T07:30", &tz), Some(at));
        assert_eq!(parse_datetime_input_in("2024-06-03T07:30:00", &tz), Some(at));
        assert_eq!(format_timestamp_in(&at, &tz), "03.06.2024 07:30");
    }
}
