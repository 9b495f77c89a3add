//! Pure calendar arithmetic: week-start resolution, ISO formatting and
//! weekday codes. `NaiveDate` carries no time or zone, so every result is
//! already "midnight" and timezone-stable.

use crate::models::WeekdayCode;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Monday of the week containing `date`. Sunday belongs to the previous
/// week.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday() {
        Weekday::Sun => -6,
        w => 1 - w.num_days_from_sunday() as i64,
    };
    date + Duration::days(offset)
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn weekday_code(date: NaiveDate) -> WeekdayCode {
    WeekdayCode::from(date.weekday())
}

/// Nearest date to `date` (in either direction) falling on `target`.
/// With seven weekdays the shift is at most three days and never tied.
pub fn nearest_weekday(date: NaiveDate, target: WeekdayCode) -> NaiveDate {
    let current = weekday_code(date).index() as i64;
    let forward = (target.index() as i64 - current).rem_euclid(7);
    let shift = if forward <= 3 { forward } else { forward - 7 };
    date + Duration::days(shift)
}

/// First date strictly after `date` falling on `target`.
pub fn next_weekday_after(date: NaiveDate, target: WeekdayCode) -> NaiveDate {
    let current = weekday_code(date).index() as i64;
    let mut forward = (target.index() as i64 - current).rem_euclid(7);
    if forward == 0 {
        forward = 7;
    }
    date + Duration::days(forward)
}

/// First date on or after `date` falling on `target`.
pub fn weekday_on_or_after(date: NaiveDate, target: WeekdayCode) -> NaiveDate {
    let current = weekday_code(date).index() as i64;
    date + Duration::days((target.index() as i64 - current).rem_euclid(7))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
