use super::weekday::WeekdayCode;
use crate::core::calendar::weekday_code;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One calendar day within a work period.
///
/// Absent values stay `None`; they are never replaced by zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    pub day_of_week: WeekdayCode,
    #[serde(with = "hhmm")]
    start_time: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    end_time: Option<NaiveTime>,
    pub total_hours: Option<f64>,
    pub break_minutes: Option<u32>,
    pub kilometers: Option<f64>,
    pub notes: Option<String>,
}

impl DayRecord {
    /// Blank record whose weekday is derived from `date`.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            day_of_week: weekday_code(date),
            start_time: None,
            end_time: None,
            total_hours: None,
            break_minutes: None,
            kilometers: None,
            notes: None,
        }
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    /// Both times, or neither. A lone start or end is dropped so the pair
    /// is never half-filled.
    pub fn times(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.start_time.zip(self.end_time)
    }

    pub fn set_times(&mut self, start: Option<NaiveTime>, end: Option<NaiveTime>) {
        match (start, end) {
            (Some(s), Some(e)) => {
                self.start_time = Some(s);
                self.end_time = Some(e);
            }
            _ => {
                self.start_time = None;
                self.end_time = None;
            }
        }
    }

    /// True when the day carries any worked-hours signal.
    pub fn has_work_signal(&self) -> bool {
        self.total_hours.is_some() || self.times().is_some()
    }

    /// A day with neither total hours nor a start/end pair.
    pub fn is_empty(&self) -> bool {
        !self.has_work_signal()
    }

    /// True when nothing at all has been entered for the day.
    pub fn is_blank(&self) -> bool {
        self.is_empty()
            && self.break_minutes.is_none()
            && self.kilometers.is_none()
            && self.notes.as_deref().is_none_or(|n| n.trim().is_empty())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
            None => s.serialize_none(),
        }
    }
}
