//! Reconciliation of an untrusted extraction payload into a canonical
//! work period.
//!
//! Order of work for every payload day:
//!  1. resolve the numeric date (ISO, or DD/MM vs MM/DD using the dates
//!     already placed, the weekday label and the claimed period start)
//!  2. if the weekday label disagrees, move the date to the nearest day
//!     carrying that label
//!  3. copy work fields, leaving missing values absent
//!  4. apply the break default
//!
//! Date moves are reported as [`DateAdjustment`]s for the internal log and
//! never as user warnings.

use crate::core::calendar::{
    format_iso_date, nearest_weekday, next_weekday_after, weekday_code, weekday_on_or_after,
};
use crate::models::employee::non_blank;
use crate::models::payload::{PayloadDay, PayloadEmployee, PayloadValidation};
use crate::models::work_period::MAX_PERIOD_DAYS;
use crate::models::{
    ConfidenceMap, DayConfidence, DayRecord, Employee, ExtractionPayload, ValidationInfo,
    WeekdayCode, WorkPeriod,
};
use crate::utils::time::parse_clock;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static SEPARATED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,4})[-/.](\d{1,2})[-/.](\d{1,4})").expect("static date regex")
});

/// Month-name forms are never ambiguous.
const NAMED_MONTH_FORMATS: [&str; 6] = [
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%A, %B %d, %Y",
    "%a %d %b %Y",
];

static NO_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:no|without|skipped|zero)\s+(?:lunch\s+)?break\b")
        .expect("static break regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcilePolicy {
    /// Break applied to a worked day that states no break at all.
    pub default_break_minutes: u32,
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self {
            default_break_minutes: 30,
        }
    }
}

/// Outcome of a reconciliation run.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Nothing usable in the payload; the current period must stay as is.
    NoChange,
    /// A full replacement for the current period.
    Replace(Box<Reconciled>),
}

impl Reconciliation {
    pub fn is_no_change(&self) -> bool {
        matches!(self, Reconciliation::NoChange)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub employee: Employee,
    pub period: WorkPeriod,
    pub confidence: ConfidenceMap,
    pub validation: Option<ValidationInfo>,
    pub warnings: Vec<String>,
    /// First and last date actually placed, regardless of weekday.
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub adjustments: Vec<DateAdjustment>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAdjustment {
    /// Position of the day in the payload list.
    pub position: usize,
    pub original: Option<String>,
    pub kind: AdjustmentKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustmentKind {
    AmbiguousFormat { chosen: NaiveDate },
    ShiftedToWeekday { from: NaiveDate, to: NaiveDate },
    InferredFromWeekday { to: NaiveDate },
    Dropped { reason: &'static str },
}

impl fmt::Display for DateAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let original = self.original.as_deref().unwrap_or("-");
        match &self.kind {
            AdjustmentKind::AmbiguousFormat { chosen } => write!(
                f,
                "day #{}: ambiguous date '{}' read as {}",
                self.position + 1,
                original,
                format_iso_date(*chosen)
            ),
            AdjustmentKind::ShiftedToWeekday { from, to } => write!(
                f,
                "day #{}: {} moved to {} to match its weekday label",
                self.position + 1,
                format_iso_date(*from),
                format_iso_date(*to)
            ),
            AdjustmentKind::InferredFromWeekday { to } => write!(
                f,
                "day #{}: date '{}' placed on {} from its weekday label",
                self.position + 1,
                original,
                format_iso_date(*to)
            ),
            AdjustmentKind::Dropped { reason } => write!(
                f,
                "day #{}: '{}' dropped ({})",
                self.position + 1,
                original,
                reason
            ),
        }
    }
}

/// Convert an extraction payload into a replacement period.
///
/// `local` is the identity already known; its non-empty fields are never
/// overwritten. A missing payload, a missing `days` list or one where no
/// day can be placed yields [`Reconciliation::NoChange`].
pub fn reconcile(
    payload: Option<&ExtractionPayload>,
    local: &Employee,
    policy: &ReconcilePolicy,
) -> Reconciliation {
    let Some(payload) = payload else {
        return Reconciliation::NoChange;
    };
    let Some(items) = payload.usable_days() else {
        return Reconciliation::NoChange;
    };

    let anchor = payload
        .period
        .as_ref()
        .and_then(|p| p.week_start_date.as_deref())
        .and_then(|s| date_candidates(s).first().copied());

    let mut adjustments = Vec::new();
    let mut placed: Vec<(DayRecord, DayConfidence, usize)> = Vec::new();
    let mut prev: Option<NaiveDate> = None;

    for (position, item) in items.iter().enumerate() {
        let Some(date) = place_day(position, item, prev, anchor, &mut adjustments) else {
            continue;
        };
        prev = Some(date);
        placed.push((
            build_record(date, item, policy),
            build_confidence(item),
            position,
        ));
    }

    // Stable sort: on duplicate dates the earlier payload entry wins.
    placed.sort_by_key(|(rec, _, _)| rec.date);
    let mut kept: Vec<(DayRecord, DayConfidence)> = Vec::with_capacity(placed.len());
    for (rec, conf, position) in placed {
        let duplicate = kept.last().is_some_and(|(last, _)| last.date == rec.date);
        if duplicate || kept.len() == MAX_PERIOD_DAYS {
            adjustments.push(DateAdjustment {
                position,
                original: Some(rec.date_str()),
                kind: AdjustmentKind::Dropped {
                    reason: if duplicate {
                        "duplicate date"
                    } else {
                        "period longer than seven days"
                    },
                },
            });
            continue;
        }
        kept.push((rec, conf));
    }

    let confidence: ConfidenceMap = kept.iter().map(|(r, c)| (r.date, c.clone())).collect();
    let records: Vec<DayRecord> = kept.into_iter().map(|(r, _)| r).collect();

    let Ok(period) = WorkPeriod::new(records) else {
        return Reconciliation::NoChange;
    };

    Reconciliation::Replace(Box::new(Reconciled {
        employee: merge_identity(local, payload.employee.as_ref()),
        week_start: period.start_date(),
        week_end: period.end_date(),
        period,
        confidence,
        validation: payload.validation.as_ref().and_then(to_validation),
        warnings: payload.warnings.clone(),
        adjustments,
        source: payload.source.as_ref().and_then(|s| {
            let kind = s.file_type.as_deref()?;
            Some(match s.page_or_image_count {
                Some(n) => format!("{kind}, {n} page(s)"),
                None => kind.to_string(),
            })
        }),
    }))
}

/// Resolve the calendar date of one payload day, or `None` when the day
/// cannot be placed at all.
fn place_day(
    position: usize,
    item: &PayloadDay,
    prev: Option<NaiveDate>,
    anchor: Option<NaiveDate>,
    adjustments: &mut Vec<DateAdjustment>,
) -> Option<NaiveDate> {
    let label = item.day_of_week.as_deref().and_then(WeekdayCode::from_label);
    let candidates = item.date.as_deref().map(date_candidates).unwrap_or_default();
    let parsed = choose_candidate(&candidates, prev, label, anchor);

    if candidates.len() > 1
        && let Some(chosen) = parsed
    {
        adjustments.push(DateAdjustment {
            position,
            original: item.date.clone(),
            kind: AdjustmentKind::AmbiguousFormat { chosen },
        });
    }

    let date = match (parsed, label) {
        (Some(d), Some(l)) if weekday_code(d) != l => {
            let to = nearest_weekday(d, l);
            adjustments.push(DateAdjustment {
                position,
                original: item.date.clone(),
                kind: AdjustmentKind::ShiftedToWeekday { from: d, to },
            });
            to
        }
        (Some(d), _) => d,
        (None, Some(l)) => {
            let to = match (prev, anchor) {
                (Some(p), _) => next_weekday_after(p, l),
                (None, Some(a)) => weekday_on_or_after(a, l),
                (None, None) => {
                    adjustments.push(dropped(position, item, "no usable date"));
                    return None;
                }
            };
            adjustments.push(DateAdjustment {
                position,
                original: item.date.clone(),
                kind: AdjustmentKind::InferredFromWeekday { to },
            });
            to
        }
        (None, None) => {
            adjustments.push(dropped(position, item, "no date and no weekday"));
            return None;
        }
    };

    Some(date)
}

fn dropped(position: usize, item: &PayloadDay, reason: &'static str) -> DateAdjustment {
    DateAdjustment {
        position,
        original: item.date.clone(),
        kind: AdjustmentKind::Dropped { reason },
    }
}

/// Every calendar date the text can denote. Year-first forms are
/// unambiguous; `a/b/y` forms yield the day-first reading first, then the
/// month-first one when it differs and is valid.
pub fn date_candidates(text: &str) -> Vec<NaiveDate> {
    let Some(caps) = SEPARATED_DATE.captures(text) else {
        return NAMED_MONTH_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(text.trim(), fmt).ok())
            .into_iter()
            .collect();
    };
    let (a, b, c) = (&caps[1], &caps[2], &caps[3]);
    let num = |s: &str| s.parse::<u32>().ok();

    if a.len() == 4 {
        let ymd = (a.parse::<i32>().ok(), num(b), num(c));
        return match ymd {
            (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d).into_iter().collect(),
            _ => Vec::new(),
        };
    }

    let (Some(x), Some(y), Some(year)) = (num(a), num(b), c.parse::<i32>().ok()) else {
        return Vec::new();
    };
    let year = if c.len() <= 2 { 2000 + year } else { year };

    let mut out = Vec::with_capacity(2);
    if let Some(day_first) = NaiveDate::from_ymd_opt(year, y, x) {
        out.push(day_first);
    }
    if let Some(month_first) = NaiveDate::from_ymd_opt(year, x, y)
        && !out.contains(&month_first)
    {
        out.push(month_first);
    }
    out
}

/// Pick one reading of an ambiguous date.
///
/// 1. the closest reading after the previously placed date
/// 2. the only reading falling on the weekday label
/// 3. the reading within a week of the claimed period start
/// 4. day-first
fn choose_candidate(
    candidates: &[NaiveDate],
    prev: Option<NaiveDate>,
    label: Option<WeekdayCode>,
    anchor: Option<NaiveDate>,
) -> Option<NaiveDate> {
    if candidates.len() <= 1 {
        return candidates.first().copied();
    }

    if let Some(p) = prev
        && let Some(next) = candidates.iter().filter(|c| **c > p).min()
    {
        return Some(*next);
    }

    if let Some(l) = label {
        let matching: Vec<_> = candidates
            .iter()
            .filter(|c| weekday_code(**c) == l)
            .collect();
        if matching.len() == 1 {
            return Some(*matching[0]);
        }
    }

    if let Some(a) = anchor
        && let Some(near) = candidates
            .iter()
            .filter(|c| (**c - a).num_days().abs() <= 7)
            .min_by_key(|c| (**c - a).num_days().abs())
    {
        return Some(*near);
    }

    candidates.first().copied()
}

fn build_record(date: NaiveDate, item: &PayloadDay, policy: &ReconcilePolicy) -> DayRecord {
    let mut rec = DayRecord::blank(date);
    let work = item.work.clone().unwrap_or_default();

    rec.set_times(
        work.start_time.as_deref().and_then(parse_clock),
        work.end_time.as_deref().and_then(parse_clock),
    );
    rec.total_hours = work.total_hours;
    rec.kilometers = work.kilometers;
    rec.notes = item.notes.clone();

    // a stated total counts as work even when it is 0
    let worked = rec.has_work_signal();
    rec.break_minutes = match work.break_minutes {
        Some(explicit) => Some(explicit.round() as u32),
        None if states_no_break(rec.notes.as_deref()) => Some(0),
        None if worked => Some(policy.default_break_minutes),
        None => None,
    };

    rec
}

fn states_no_break(notes: Option<&str>) -> bool {
    notes.is_some_and(|n| NO_BREAK.is_match(n))
}

fn build_confidence(item: &PayloadDay) -> DayConfidence {
    item.confidence
        .as_ref()
        .map(|c| DayConfidence {
            overall: c.overall,
            fields: c.fields.clone(),
        })
        .unwrap_or_default()
}

fn merge_identity(local: &Employee, remote: Option<&PayloadEmployee>) -> Employee {
    let mut out = local.clone();
    if let Some(r) = remote {
        fill_if_empty(&mut out.full_name, &r.full_name);
        fill_if_empty(&mut out.email, &r.email);
        fill_if_empty(&mut out.employee_id, &r.employee_id);
    }
    out
}

fn fill_if_empty(slot: &mut Option<String>, value: &Option<String>) {
    if non_blank(slot).is_none()
        && let Some(v) = non_blank(value)
    {
        *slot = Some(v.to_string());
    }
}

fn to_validation(v: &PayloadValidation) -> Option<ValidationInfo> {
    let info = ValidationInfo {
        supervisor: v.supervisor.clone(),
        approver: v.approver.clone(),
        client: v.client.clone(),
        custom: v.custom.clone(),
    };
    (!info.is_empty()).then_some(info)
}

/// True when the period does not start on a Monday.
pub fn is_offset_period(start: NaiveDate) -> bool {
    start.weekday() != chrono::Weekday::Mon
}
