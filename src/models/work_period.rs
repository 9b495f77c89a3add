use super::day_record::DayRecord;
use crate::core::calendar::weekday_code;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

pub const MAX_PERIOD_DAYS: usize = 7;

/// Ordered sequence of 1–7 day records, strictly increasing by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkPeriod {
    days: Vec<DayRecord>,
}

impl WorkPeriod {
    pub fn new(days: Vec<DayRecord>) -> AppResult<Self> {
        if days.is_empty() || days.len() > MAX_PERIOD_DAYS {
            return Err(AppError::InvalidPeriod(format!(
                "a period holds 1 to {MAX_PERIOD_DAYS} days, got {}",
                days.len()
            )));
        }

        if let Some(w) = days.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(AppError::InvalidPeriod(format!(
                "dates must be strictly increasing ({} then {})",
                w[0].date_str(),
                w[1].date_str()
            )));
        }

        Ok(Self { days })
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.days[self.days.len() - 1].date
    }

    /// Mutable access keeps the date fixed: only the optional fields of a
    /// day may be edited in place.
    pub fn update_day<F>(&mut self, date: NaiveDate, edit: F) -> AppResult<()>
    where
        F: FnOnce(&mut DayRecord),
    {
        let day = self
            .days
            .iter_mut()
            .find(|d| d.date == date)
            .ok_or_else(|| AppError::DayNotInPeriod(date.format("%Y-%m-%d").to_string()))?;

        edit(day);
        day.date = date;
        day.day_of_week = weekday_code(date);
        Ok(())
    }

    /// True when the user has entered nothing in any day.
    pub fn is_blank(&self) -> bool {
        self.days.iter().all(DayRecord::is_blank)
    }
}
