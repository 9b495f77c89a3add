use crate::core::calendar::{parse_iso_date, today};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a CLI date argument; `today` is accepted as a shortcut.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_iso_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_date(s: Option<&String>) -> AppResult<NaiveDate> {
    match s {
        Some(s) => parse_date_arg(s),
        None => Ok(today()),
    }
}
