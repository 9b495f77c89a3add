use crate::config::Config;
use crate::core::AppState;
use crate::core::calendar::{format_iso_date, weekday_code};
use crate::core::reconcile::{Reconciliation, is_offset_period, reconcile};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employee, load_state, save_state};
use crate::errors::{AppError, AppResult};
use crate::models::ExtractionPayload;
use crate::provider::prompt::build_prompt;
use crate::provider::upload::Upload;
use crate::provider::{self, ExtractionRequest};
use crate::ui::messages::{detail, info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;

/// High-level logic for the `extract` and `apply` commands.
pub struct ExtractLogic;

impl ExtractLogic {
    /// Send an upload to the configured provider and apply the answer.
    pub fn extract(pool: &mut DbPool, cfg: &Config, file: &str) -> AppResult<Reconciliation> {
        let current = load_state(&pool.conn)?;
        let employee = match &current {
            Some(s) => s.employee.clone(),
            None => load_employee(&pool.conn)?,
        };
        if !employee.has_name() {
            return Err(AppError::MissingEmployeeName);
        }

        let upload = Upload::inspect(&expand_tilde(file), cfg.max_upload_mb)?;
        let provider = provider::build(cfg)?;
        info(format!(
            "Extracting {} ({}, {} bytes) with provider '{}'",
            upload.path.display(),
            upload.kind,
            upload.size,
            provider.name()
        ));

        let request = ExtractionRequest {
            prompt: build_prompt(
                &employee.display_name(),
                current.as_ref().map(|s| s.period.start_date()),
                &cfg.reconcile_policy(),
            ),
            employee_name: employee.display_name(),
            upload,
        };
        let raw = provider.extract(&request)?;
        let payload = ExtractionPayload::parse_response(&raw);

        Self::apply_payload(pool, cfg, current, payload.as_ref(), file)
    }

    /// Apply a payload captured in a JSON file.
    pub fn apply_file(pool: &mut DbPool, cfg: &Config, file: &str) -> AppResult<Reconciliation> {
        let raw = fs::read_to_string(expand_tilde(file))?;
        let payload = ExtractionPayload::parse_response(&raw);
        let current = load_state(&pool.conn)?;

        Self::apply_payload(pool, cfg, current, payload.as_ref(), file)
    }

    fn apply_payload(
        pool: &mut DbPool,
        cfg: &Config,
        current: Option<AppState>,
        payload: Option<&ExtractionPayload>,
        origin: &str,
    ) -> AppResult<Reconciliation> {
        let employee = match &current {
            Some(s) => s.employee.clone(),
            None => load_employee(&pool.conn)?,
        };

        let outcome = reconcile(payload, &employee, &cfg.reconcile_policy());

        let Reconciliation::Replace(r) = &outcome else {
            warning("Nothing to apply: the extraction holds no days. The current period is unchanged.");
            if let Err(e) = ttlog(&pool.conn, "extract", origin, "No usable days, nothing applied") {
                warning(format!("Failed to write internal log: {e}"));
            }
            return Ok(outcome);
        };

        let base = current.unwrap_or_else(|| AppState::new(employee, r.period.clone()));
        let next = base.apply(&outcome);
        pool.with_conn(|conn| save_state(conn, &next))?;

        let range = format!(
            "{} → {}",
            format_iso_date(r.week_start),
            format_iso_date(r.week_end)
        );
        let mut message = format!("{} day(s) applied", r.period.len());
        if let Some(src) = &r.source {
            message.push_str(&format!(" from {src}"));
        }
        log_or_warn(pool, "extract", &range, &message);
        for adj in &r.adjustments {
            log_or_warn(pool, "reconcile", origin, &adj.to_string());
        }

        success(format!("Extraction applied: {range}, {message}"));
        if is_offset_period(r.week_start) {
            info(format!(
                "The period starts on {} instead of a Monday.",
                weekday_code(r.week_start)
            ));
        }
        if !r.warnings.is_empty() {
            warning(format!("{} warning(s) from the extraction:", r.warnings.len()));
            for w in &r.warnings {
                detail(w);
            }
        }

        Ok(outcome)
    }
}

fn log_or_warn(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&pool.conn, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
