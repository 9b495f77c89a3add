// src/export/json.rs

use crate::core::AppState;
use crate::core::hours::{day_hours, summarize};
use crate::models::{DayRecord, Employee, ValidationInfo};
use serde::Serialize;

/// Flat JSON view of the current period, with derived hours per day.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PeriodExport<'a> {
    pub employee: &'a Employee,
    pub week_start_date: String,
    pub week_end_date: String,
    pub days: Vec<DayExport<'a>>,
    pub total_hours: f64,
    pub total_kilometers: f64,
    pub validation: Option<&'a ValidationInfo>,
    pub warnings: &'a [String],
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DayExport<'a> {
    #[serde(flatten)]
    pub day: &'a DayRecord,
    pub hours: f64,
}

impl<'a> PeriodExport<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        let summary = summarize(&state.period);
        Self {
            employee: &state.employee,
            week_start_date: state.period.start_date().format("%Y-%m-%d").to_string(),
            week_end_date: state.period.end_date().format("%Y-%m-%d").to_string(),
            days: state
                .period
                .days()
                .iter()
                .map(|day| DayExport {
                    day,
                    hours: day_hours(day),
                })
                .collect(),
            total_hours: summary.total_hours,
            total_kilometers: summary.total_kilometers,
            validation: state.validation.as_ref(),
            warnings: &state.warnings,
        }
    }
}
