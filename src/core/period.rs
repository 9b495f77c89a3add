//! Blank period generation.

use crate::core::calendar::monday_of;
use crate::errors::{AppError, AppResult};
use crate::models::work_period::MAX_PERIOD_DAYS;
use crate::models::{DayRecord, WorkPeriod};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// How long a generated period is, and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodPolicy {
    /// Monday to Friday of the week containing the start date.
    WorkWeek,
    /// `n` consecutive days (1–7) beginning exactly at the start date.
    Days(u8),
}

impl PeriodPolicy {
    /// `None` keeps the fixed Mon–Fri week.
    pub fn from_days(days: Option<u8>) -> Self {
        days.map_or(PeriodPolicy::WorkWeek, PeriodPolicy::Days)
    }
}

/// Build a blank period. Every record has only `date` and `dayOfWeek` set.
pub fn generate_period(start: NaiveDate, policy: PeriodPolicy) -> AppResult<WorkPeriod> {
    let (first, len) = match policy {
        PeriodPolicy::WorkWeek => (monday_of(start), 5usize),
        PeriodPolicy::Days(n) => {
            let n = n as usize;
            if n == 0 || n > MAX_PERIOD_DAYS {
                return Err(AppError::InvalidPeriod(format!(
                    "period length must be between 1 and {MAX_PERIOD_DAYS} days, got {n}"
                )));
            }
            (start, n)
        }
    };

    let days = (0..len)
        .map(|i| DayRecord::blank(first + Duration::days(i as i64)))
        .collect();

    WorkPeriod::new(days)
}

/// Blank Mon–Fri week containing `date`.
pub fn blank_week(date: NaiveDate) -> AppResult<WorkPeriod> {
    generate_period(date, PeriodPolicy::WorkWeek)
}
