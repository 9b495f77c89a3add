// src/export/logic.rs

use crate::core::AppState;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, write_text};
use crate::export::json::PeriodExport;
use crate::export::payroll_csv::{default_file_name, payroll_rows, render_csv};
use crate::export::{CsvQuoting, ExportFormat, notify_export_success};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the current period.
    ///
    /// - `format`: payroll CSV or JSON dump
    /// - `file`: output path; defaults to the payroll naming convention in
    ///   the current directory
    /// - `force`: overwrite without asking
    ///
    /// Returns the written path.
    pub fn export(
        state: &AppState,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        quoting: CsvQuoting,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => expand_tilde(f),
            None => {
                let name = default_file_name(&state.employee, &state.period);
                match format {
                    ExportFormat::Csv => PathBuf::from(name),
                    ExportFormat::Json => PathBuf::from(name).with_extension("json"),
                }
            }
        };

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => {
                info(format!("Exporting payroll CSV: {}", path.display()));
                let name = state.employee.display_name();
                if payroll_rows(&name, &state.period).is_empty() {
                    warning("No worked hours or kilometers in this period: only the header is written.");
                }
                write_text(&path, &render_csv(&state.employee, &state.period, quoting)?)?;
                notify_export_success("CSV", &path);
            }
            ExportFormat::Json => {
                info(format!("Exporting to JSON: {}", path.display()));
                let json = serde_json::to_string_pretty(&PeriodExport::from_state(state))?;
                write_text(&path, &json)?;
                notify_export_success("JSON", &path);
            }
        }

        Ok(path)
    }
}
