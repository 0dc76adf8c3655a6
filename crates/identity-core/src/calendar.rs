//! Calendar helpers for the activity grids.
//!
//! Months are zero-based here (January = 0), the same convention the week and
//! month views use when they key activity dates. Every function is total: a
//! month index past December rolls into the following year, a day past the
//! end of the month rolls into the next month and day 0 is the last day of the
//! previous month.

use chrono::{Datelike, Days, Month, Months, NaiveDate};

/// Labels for a Monday-first calendar grid.
pub const MONDAY_FIRST_LABELS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Format a date as the `YYYY-MM-DD` key used by `daily_activity`.
///
/// The triple is resolved first, so `(2025, 12, 1)` keys as `2026-01-01`.
/// Dates beyond the representable range keep the raw fields.
pub fn iso_key(year: i32, month0: u32, day: u32) -> String {
    match resolve_date(year, month0, day) {
        Some(date) => iso_key_of(date),
        None => format!("{:04}-{:02}-{:02}", year, month0.saturating_add(1), day),
    }
}

/// Key for an already-resolved date.
pub fn iso_key_of(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` activity key.
pub fn parse_iso_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    let year = year.checked_add(i32::try_from(month0 / 12).ok()?)?;
    NaiveDate::from_ymd_opt(year, month0 % 12 + 1, 1)
}

/// Number of days in the given month.
///
/// Computed as the day before the first of the following month. Months
/// outside chrono's range report 31.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    first_of_month(year, month0)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Resolve (year, month0, day) to a date, rolling overflowing days forward.
pub fn resolve_date(year: i32, month0: u32, day: u32) -> Option<NaiveDate> {
    let first = first_of_month(year, month0)?;
    if day == 0 {
        return first.pred_opt();
    }
    first.checked_add_days(Days::new(u64::from(day - 1)))
}

/// Weekday index with 0 = Sunday through 6 = Saturday.
pub fn weekday_of(year: i32, month0: u32, day: u32) -> u32 {
    resolve_date(year, month0, day)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Number of empty cells before the 1st in a Monday-first grid.
pub fn monday_grid_offset(weekday_sunday0: u32) -> u32 {
    (weekday_sunday0 % 7 + 6) % 7
}

/// Monday of the week containing `date`.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// English month name, e.g. "January".
pub fn month_name(month0: u32) -> &'static str {
    u8::try_from(month0 % 12 + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("January")
}

/// Heading for a month grid, e.g. "January 2026".
pub fn month_heading(year: i32, month0: u32) -> String {
    format!("{} {}", month_name(month0), year)
}
