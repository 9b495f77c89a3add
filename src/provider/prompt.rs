//! Extraction instructions sent to every provider.

use crate::core::ReconcilePolicy;
use crate::core::calendar::format_iso_date;
use chrono::NaiveDate;

/// Build the instructions for one upload. The JSON contract here is the one
/// `ExtractionPayload` reads.
pub fn build_prompt(
    employee_name: &str,
    period_hint: Option<NaiveDate>,
    policy: &ReconcilePolicy,
) -> String {
    let hint = period_hint
        .map(|d| format!("The timesheet is expected to cover the period starting {}.\n", format_iso_date(d)))
        .unwrap_or_default();

    format!(
        r#"You extract worked hours from a timesheet document for employee "{employee_name}".
{hint}Return ONLY a JSON object, no prose, with this shape (use null for anything not visible):
{{
  "employee": {{"fullName": string, "employeeId": string, "email": string}},
  "period": {{"weekStartDate": "YYYY-MM-DD", "weekEndDate": "YYYY-MM-DD"}},
  "days": [{{
    "date": "YYYY-MM-DD",
    "dayOfWeek": "MON|TUE|WED|THU|FRI|SAT|SUN",
    "work": {{"startTime": "HH:MM", "endTime": "HH:MM", "totalHours": number,
             "breakMinutes": number, "kilometers": number}},
    "notes": string,
    "confidence": {{"overall": 0-1, "fields": {{"startTime": 0-1, "endTime": 0-1,
                   "totalHours": 0-1, "breakMinutes": 0-1, "kilometers": 0-1}}}}
  }}],
  "validation": {{"supervisor": string, "approver": string, "client": string, "custom": object}},
  "warnings": [string],
  "source": {{"fileType": string, "pageOrImageCount": number}}
}}
Rules:
- Return between 1 and 7 days, in calendar order, one entry per date. Do not invent days that are not on the document.
- The weekday written on the document is authoritative: copy it into "dayOfWeek" exactly, even if it seems to disagree with the date.
- Write dates as they appear; keep day/month order as printed.
- Times are 24-hour HH:MM. Leave "breakMinutes" null if no break is written; if the document says no break was taken, write 0 and mention it in "notes". A worked day without a break is booked with {break_minutes} minutes.
- Supervisor, approver and client names belong in "validation", never in "employee".
- Add a warning for anything illegible or contradictory.
"#,
        break_minutes = policy.default_break_minutes,
    )
}
