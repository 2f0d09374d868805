// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Date parsing, formatting, and appointment id generation.

use chrono::{Days, NaiveDate, NaiveDateTime};
use rand::Rng;

/// Date formats accepted from user-supplied tool arguments.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%B %d, %Y", "%b %d, %Y"];

/// Parse user date input. Supports `today`, `tomorrow`, and common formats.
pub fn parse_user_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lower = input.trim().to_lowercase();

    if lower == "today" {
        return Some(today);
    }
    if lower == "tomorrow" {
        return today.checked_add_days(Days::new(1));
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input.trim(), fmt).ok())
}

/// Parse an ISO date-time argument, tolerating a trailing zone designator.
pub fn parse_iso_datetime(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Check that a date falls inside the allowed booking window:
/// not in the past, at most `window_days` ahead.
pub fn is_within_booking_window(date: NaiveDate, today: NaiveDate, window_days: u32) -> bool {
    let max = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(today);
    date >= today && date <= max
}

/// Format an appointment date-time for user display,
/// e.g. `January 15, 2026 at 10:00 AM`.
pub fn format_appointment_date_time(dt: NaiveDateTime) -> String {
    dt.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// Generate an appointment reference id: `<PREFIX>-<yyyymmdd>-<3-digit suffix>`.
///
/// Three random digits give only 1000 distinct suffixes per day per prefix;
/// collision is not guarded against.
pub fn generate_appointment_id(prefix: &str, date_time: NaiveDateTime) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("{prefix}-{}-{suffix:03}", date_time.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn relative_dates_resolve_against_today() {
        let today = d(2026, 8, 7);
        assert_eq!(parse_user_date("today", today), Some(today));
        assert_eq!(parse_user_date("Tomorrow", today), Some(d(2026, 8, 8)));
    }

    #[test]
    fn common_date_formats_parse() {
        let today = d(2026, 8, 7);
        assert_eq!(parse_user_date("2026-08-15", today), Some(d(2026, 8, 15)));
        assert_eq!(parse_user_date("08/15/2026", today), Some(d(2026, 8, 15)));
        assert_eq!(
            parse_user_date("August 15, 2026", today),
            Some(d(2026, 8, 15))
        );
    }

    #[test]
    fn nonsense_date_is_none() {
        assert_eq!(parse_user_date("next blue moon", d(2026, 8, 7)), None);
    }

    #[test]
    fn iso_datetime_with_and_without_zone() {
        let expected = d(2026, 8, 15).and_hms_opt(10, 0, 0).unwrap();
        assert_eq!(parse_iso_datetime("2026-08-15T10:00:00"), Some(expected));
        assert_eq!(parse_iso_datetime("2026-08-15T10:00:00Z"), Some(expected));
        assert_eq!(parse_iso_datetime("2026-08-15T10:00"), Some(expected));
        assert_eq!(parse_iso_datetime("not a datetime"), None);
    }

    #[test]
    fn booking_window_excludes_past_and_far_future() {
        let today = d(2026, 8, 7);
        assert!(is_within_booking_window(today, today, 30));
        assert!(is_within_booking_window(d(2026, 9, 6), today, 30));
        assert!(!is_within_booking_window(d(2026, 8, 6), today, 30));
        assert!(!is_within_booking_window(d(2026, 9, 7), today, 30));
    }

    #[test]
    fn appointment_id_shape() {
        let dt = d(2026, 8, 15).and_hms_opt(10, 0, 0).unwrap();
        let id = generate_appointment_id("APT", dt);
        assert!(id.starts_with("APT-20260815-"), "got {id}");
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 3);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn display_format_reads_naturally() {
        let dt = d(2026, 1, 5).and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(format_appointment_date_time(dt), "January 5, 2026 at 2:30 PM");
    }
}
