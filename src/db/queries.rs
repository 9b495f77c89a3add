use crate::core::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::{ConfidenceMap, DayRecord, Employee, ValidationInfo, WeekdayCode, WorkPeriod};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

const META_CONFIDENCE: &str = "confidence";
const META_VALIDATION: &str = "validation";
const META_WARNINGS: &str = "warnings";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_opt_time(col: usize, s: Option<String>) -> Result<Option<NaiveTime>> {
    s.map(|t| {
        NaiveTime::parse_from_str(&t, "%H:%M")
            .map_err(|_| conversion_error(col, AppError::InvalidTime(t.clone())))
    })
    .transpose()
}

pub fn map_day_row(row: &Row) -> Result<DayRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;

    let dow: String = row.get("day_of_week")?;
    if WeekdayCode::from_label(&dow).is_none() {
        return Err(conversion_error(1, AppError::InvalidWeekday(dow)));
    }

    let start = parse_opt_time(2, row.get("start_time")?)?;
    let end = parse_opt_time(3, row.get("end_time")?)?;

    // dayOfWeek is always re-derived from the stored date
    let mut day = DayRecord::blank(date);
    day.set_times(start, end);
    day.total_hours = row.get("total_hours")?;
    day.break_minutes = row.get("break_minutes")?;
    day.kilometers = row.get("kilometers")?;
    day.notes = row.get("notes")?;
    Ok(day)
}

fn load_meta<T: DeserializeOwned>(conn: &Connection, key: &str) -> AppResult<Option<T>> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM meta WHERE key = ?1", [key], |r| r.get(0))
        .optional()?;

    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

fn store_meta<T: Serialize>(conn: &Connection, key: &str, value: &T) -> AppResult<()> {
    conn.execute(
        "INSERT INTO meta (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, serde_json::to_string(value)?],
    )?;
    Ok(())
}

pub fn load_employee(conn: &Connection) -> AppResult<Employee> {
    let employee = conn
        .query_row(
            "SELECT full_name, email, employee_id FROM employee WHERE id = 1",
            [],
            |r| {
                Ok(Employee {
                    full_name: r.get(0)?,
                    email: r.get(1)?,
                    employee_id: r.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(employee.unwrap_or_default())
}

/// Load the draft, or `None` if no period was ever created.
pub fn load_state(conn: &Connection) -> AppResult<Option<AppState>> {
    let mut stmt = conn.prepare("SELECT * FROM days ORDER BY date ASC")?;
    let rows = stmt.query_map([], map_day_row)?;

    let mut days = Vec::new();
    for r in rows {
        days.push(r?);
    }
    if days.is_empty() {
        return Ok(None);
    }

    let period = WorkPeriod::new(days)?;
    let mut state = AppState::new(load_employee(conn)?, period);
    state.confidence = load_meta::<ConfidenceMap>(conn, META_CONFIDENCE)?.unwrap_or_default();
    state.validation = load_meta::<Option<ValidationInfo>>(conn, META_VALIDATION)?.flatten();
    state.warnings = load_meta::<Vec<String>>(conn, META_WARNINGS)?.unwrap_or_default();

    Ok(Some(state))
}

/// Like [`load_state`] but a missing draft is an error.
pub fn require_state(conn: &Connection) -> AppResult<AppState> {
    load_state(conn)?.ok_or(AppError::NoDraft)
}

/// Replace the stored draft atomically: either the whole new state is
/// written or the previous one is kept.
pub fn save_state(conn: &mut Connection, state: &AppState) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM days", [])?;
    tx.execute("DELETE FROM meta", [])?;

    {
        let mut ins = tx.prepare(
            "INSERT INTO days (date, day_of_week, start_time, end_time,
                               total_hours, break_minutes, kilometers, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;

        for d in state.period.days() {
            let fmt = |t: Option<NaiveTime>| t.map(|t| t.format("%H:%M").to_string());
            ins.execute(params![
                d.date_str(),
                d.day_of_week.code(),
                fmt(d.start_time()),
                fmt(d.end_time()),
                d.total_hours,
                d.break_minutes,
                d.kilometers,
                d.notes,
            ])?;
        }
    }

    save_employee(&tx, &state.employee)?;

    store_meta(&tx, META_CONFIDENCE, &state.confidence)?;
    store_meta(&tx, META_VALIDATION, &state.validation)?;
    store_meta(&tx, META_WARNINGS, &state.warnings)?;

    tx.commit()?;
    Ok(())
}

/// Store the identity alone; it survives period changes.
pub fn save_employee(conn: &Connection, employee: &Employee) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employee (id, full_name, email, employee_id) VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET full_name = excluded.full_name,
                                       email = excluded.email,
                                       employee_id = excluded.employee_id",
        params![employee.full_name, employee.email, employee.employee_id],
    )?;
    Ok(())
}
