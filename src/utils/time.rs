//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Strict `HH:MM`, as entered on the command line.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Lenient clock parsing for extracted text: `9:00`, `09:00:00`, `09.00`,
/// `0900`, `5:30 PM`.
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    ["%H:%M", "%H:%M:%S", "%H.%M", "%I:%M %p", "%I:%M%p", "%H%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

pub fn format_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
