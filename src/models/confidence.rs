use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Confidence scores reported for one day. `None` means "no signal" and is
/// rendered without emphasis; it is never read as zero confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayConfidence {
    pub overall: Option<f64>,
    pub fields: BTreeMap<String, Option<f64>>,
}

impl DayConfidence {
    pub fn field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied().flatten()
    }
}

/// date → field → score. Drives display emphasis only.
pub type ConfidenceMap = BTreeMap<NaiveDate, DayConfidence>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn classify(score: Option<f64>, low: f64, medium: f64) -> Self {
        match score {
            None => ConfidenceLevel::Unknown,
            Some(s) if s < low => ConfidenceLevel::Low,
            Some(s) if s < medium => ConfidenceLevel::Medium,
            Some(_) => ConfidenceLevel::High,
        }
    }
}
