//! Worked-hours derivation shared by the summary view and the payroll
//! export.

use crate::models::{DayRecord, WorkPeriod};

/// Raw worked hours for a day.
///
/// - `totalHours` when present and positive
/// - else `(end - start) - break` from the time pair
/// - else `0`
///
/// May be negative (e.g. end before start); see [`day_hours`].
pub fn worked_hours(day: &DayRecord) -> f64 {
    if let Some(total) = day.total_hours
        && total > 0.0
    {
        return total;
    }

    match day.times() {
        Some((start, end)) => {
            let minutes = (end - start).num_minutes() as f64;
            let brk = day.break_minutes.unwrap_or(0) as f64;
            minutes / 60.0 - brk / 60.0
        }
        None => 0.0,
    }
}

/// Worked hours clamped at zero. Both the summary and the export use this.
pub fn day_hours(day: &DayRecord) -> f64 {
    worked_hours(day).max(0.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodSummary {
    pub total_hours: f64,
    pub total_kilometers: f64,
    pub days_worked: usize,
}

pub fn summarize(period: &WorkPeriod) -> PeriodSummary {
    period
        .days()
        .iter()
        .fold(PeriodSummary::default(), |mut acc, day| {
            let hours = day_hours(day);
            acc.total_hours += hours;
            acc.total_kilometers += day.kilometers.unwrap_or(0.0);
            if hours > 0.0 {
                acc.days_worked += 1;
            }
            acc
        })
}

/// Hours shown with two decimals, as in the payroll file.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}
