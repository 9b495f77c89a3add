use crate::core::AppState;
use crate::core::calendar::format_iso_date;
use crate::core::period::{PeriodPolicy, generate_period};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employee, load_state, require_state, save_employee, save_state};
use crate::errors::{AppError, AppResult};
use crate::models::payload::parse_number_text;
use crate::models::{DayRecord, Employee};
use crate::ui::messages::{success, warning};
use chrono::{NaiveDate, NaiveTime};

/// Manual edits of one day. Numeric fields arrive as typed text: an empty
/// string clears the field, unparseable text degrades to "absent".
#[derive(Debug, Default, Clone)]
pub struct DayEdit {
    pub times: Option<(NaiveTime, NaiveTime)>,
    pub total_hours: Option<String>,
    pub break_minutes: Option<String>,
    pub kilometers: Option<String>,
    pub notes: Option<String>,
    pub clear: bool,
}

impl DayEdit {
    /// Field names as used in the confidence map.
    fn touched(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.clear || self.times.is_some() {
            out.extend(["startTime", "endTime"]);
        }
        if self.clear || self.total_hours.is_some() {
            out.push("totalHours");
        }
        if self.clear || self.break_minutes.is_some() {
            out.push("breakMinutes");
        }
        if self.clear || self.kilometers.is_some() {
            out.push("kilometers");
        }
        if self.clear || self.notes.is_some() {
            out.push("notes");
        }
        out
    }

    fn apply_to(&self, day: &mut DayRecord) {
        if self.clear {
            *day = DayRecord::blank(day.date);
        }
        if let Some((start, end)) = self.times {
            day.set_times(Some(start), Some(end));
        }
        if let Some(text) = &self.total_hours {
            day.total_hours = lenient_field("total hours", text);
        }
        if let Some(text) = &self.break_minutes {
            day.break_minutes = lenient_field("break", text).map(|m| m.round() as u32);
        }
        if let Some(text) = &self.kilometers {
            day.kilometers = lenient_field("kilometers", text);
        }
        if let Some(text) = &self.notes {
            let t = text.trim();
            day.notes = (!t.is_empty()).then(|| t.to_string());
        }
    }
}

fn lenient_field(label: &str, text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    let parsed = parse_number_text(text);
    if parsed.is_none() {
        warning(format!("'{text}' is not a number: {label} left empty."));
    }
    parsed
}

/// High-level logic for manual entry commands.
pub struct EditLogic;

impl EditLogic {
    /// Start a blank period. A draft holding entered data is only replaced
    /// with `force`.
    pub fn new_period(
        pool: &mut DbPool,
        start: NaiveDate,
        policy: PeriodPolicy,
        force: bool,
    ) -> AppResult<AppState> {
        let period = generate_period(start, policy)?;

        let state = match load_state(&pool.conn)? {
            Some(current) if !current.period.is_blank() && !force => {
                return Err(AppError::DraftNotEmpty);
            }
            Some(current) => current.with_period(period),
            None => AppState::new(load_employee(&pool.conn)?, period),
        };

        pool.with_conn(|conn| save_state(conn, &state))?;

        let range = format!(
            "{} → {}",
            format_iso_date(state.period.start_date()),
            format_iso_date(state.period.end_date())
        );
        if let Err(e) = ttlog(&pool.conn, "new", &range, "Blank period created") {
            warning(format!("Failed to write internal log: {e}"));
        }
        success(format!(
            "New period {range} ({} days)",
            state.period.len()
        ));

        Ok(state)
    }

    /// Update the identity. `Some("")` clears a field, `None` keeps it.
    pub fn set_employee(
        pool: &mut DbPool,
        name: Option<&str>,
        email: Option<&str>,
        employee_id: Option<&str>,
    ) -> AppResult<Employee> {
        let mut employee = load_employee(&pool.conn)?;

        let assign = |slot: &mut Option<String>, value: Option<&str>| {
            if let Some(v) = value {
                let v = v.trim();
                *slot = (!v.is_empty()).then(|| v.to_string());
            }
        };
        assign(&mut employee.full_name, name);
        assign(&mut employee.email, email);
        assign(&mut employee.employee_id, employee_id);

        save_employee(&pool.conn, &employee)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "employee",
            &employee.display_name(),
            "Employee identity updated",
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }
        success(format!("Employee: {}", employee.display_name()));

        Ok(employee)
    }

    pub fn set_day(pool: &mut DbPool, date: NaiveDate, edit: &DayEdit) -> AppResult<AppState> {
        let current = require_state(&pool.conn)?;
        let next = current.edit_day(date, &edit.touched(), |day| edit.apply_to(day))?;

        pool.with_conn(|conn| save_state(conn, &next))?;

        if let Err(e) = ttlog(&pool.conn, "set", &format_iso_date(date), "Day edited manually") {
            warning(format!("Failed to write internal log: {e}"));
        }
        success(format!("Updated {}", format_iso_date(date)));

        Ok(next)
    }
}
