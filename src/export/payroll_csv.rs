//! Payroll CSV rendering.
//!
//! Layout: a bare header line, then one quoted row per earnings line,
//! joined with `\n` and without a trailing newline.

use crate::core::hours::{day_hours, format_hours};
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, WorkPeriod};
use crate::utils::formatting::trim_number;
use clap::ValueEnum;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};

pub const HEADER: &str = "Employee Name,Date,Earnings Rate,Units,Notes";
pub const ORDINARY_HOURS: &str = "Ordinary Hours";
pub const KILOMETERS: &str = "Kilometers";

/// How embedded double quotes are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Every field wrapped in quotes as-is. A value containing `"` produces
    /// a row that payroll importers may misread.
    #[default]
    Verbatim,
    /// RFC 4180 quoting: embedded quotes are doubled.
    Escaped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRow {
    pub employee: String,
    pub date: String,
    pub earnings_rate: &'static str,
    pub units: String,
    pub notes: String,
}

impl PayrollRow {
    fn fields(&self) -> [&str; 5] {
        [
            self.employee.as_str(),
            self.date.as_str(),
            self.earnings_rate,
            self.units.as_str(),
            self.notes.as_str(),
        ]
    }
}

/// Rows in period order; per day the hours row precedes the kilometers row.
/// Days with no positive hours and no kilometers produce nothing.
pub fn payroll_rows(employee_name: &str, period: &WorkPeriod) -> Vec<PayrollRow> {
    let mut rows = Vec::new();

    for day in period.days() {
        let hours = day_hours(day);
        if hours > 0.0 {
            rows.push(PayrollRow {
                employee: employee_name.to_string(),
                date: day.date_str(),
                earnings_rate: ORDINARY_HOURS,
                units: format_hours(hours),
                notes: day.notes.clone().unwrap_or_default(),
            });
        }

        if let Some(km) = day.kilometers
            && km > 0.0
        {
            rows.push(PayrollRow {
                employee: employee_name.to_string(),
                date: day.date_str(),
                earnings_rate: KILOMETERS,
                units: format_hours(km),
                notes: format!("{} km", trim_number(km)),
            });
        }
    }

    rows
}

pub fn render_csv(
    employee: &Employee,
    period: &WorkPeriod,
    quoting: CsvQuoting,
) -> AppResult<String> {
    let rows = payroll_rows(&employee.display_name(), period);

    let body = match quoting {
        CsvQuoting::Verbatim => rows
            .iter()
            .map(|r| {
                r.fields()
                    .iter()
                    .map(|f| format!("\"{f}\""))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>(),
        CsvQuoting::Escaped => escaped_lines(&rows)?,
    };

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(body);
    Ok(lines.join("\n"))
}

fn escaped_lines(rows: &[PayrollRow]) -> AppResult<Vec<String>> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for r in rows {
        wtr.write_record(r.fields())?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    Ok(text.lines().map(str::to_string).collect())
}

/// `timesheet_<start>_<Employee_Name>.csv`
pub fn default_file_name(employee: &Employee, period: &WorkPeriod) -> String {
    format!(
        "timesheet_{}_{}.csv",
        period.start_date().format("%Y-%m-%d"),
        crate::utils::formatting::underscore_whitespace(&employee.display_name())
    )
}
