//! Application state: the single source of truth for the current timesheet.
//! Every operation takes a state and returns a new one.

use crate::core::reconcile::Reconciliation;
use crate::errors::AppResult;
use crate::models::{ConfidenceMap, DayRecord, Employee, ValidationInfo, WorkPeriod};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub employee: Employee,
    pub period: WorkPeriod,
    pub confidence: ConfidenceMap,
    pub validation: Option<ValidationInfo>,
    /// Warnings of the last applied extraction, verbatim.
    pub warnings: Vec<String>,
}

impl AppState {
    pub fn new(employee: Employee, period: WorkPeriod) -> Self {
        Self {
            employee,
            period,
            confidence: ConfidenceMap::new(),
            validation: None,
            warnings: Vec::new(),
        }
    }

    /// Replace the period with a blank one; identity is kept, extraction
    /// metadata is cleared.
    pub fn with_period(&self, period: WorkPeriod) -> Self {
        Self::new(self.employee.clone(), period)
    }

    /// Apply a reconciliation outcome. `NoChange` returns the state as it
    /// was, so manual entries survive a failed extraction.
    pub fn apply(&self, outcome: &Reconciliation) -> Self {
        match outcome {
            Reconciliation::NoChange => self.clone(),
            Reconciliation::Replace(r) => Self {
                employee: r.employee.clone(),
                period: r.period.clone(),
                confidence: r.confidence.clone(),
                validation: r.validation.clone(),
                warnings: r.warnings.clone(),
            },
        }
    }

    /// Edit one day. Confidence scores of the `touched` fields are dropped:
    /// a value typed by the user is no longer flagged.
    pub fn edit_day<F>(&self, date: NaiveDate, touched: &[&str], edit: F) -> AppResult<Self>
    where
        F: FnOnce(&mut DayRecord),
    {
        let mut next = self.clone();
        next.period.update_day(date, edit)?;

        if let Some(conf) = next.confidence.get_mut(&date) {
            for field in touched {
                conf.fields.insert((*field).to_string(), None);
            }
        }

        Ok(next)
    }
}
