//! Unified application error type.
//! All modules (db, core, provider, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("No timesheet draft found. Run `rtimesheet new` first")]
    NoDraft,

    #[error("The current period already holds entered data (use --force to discard it)")]
    DraftNotEmpty,

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Period errors
    // ---------------------------
    #[error("Invalid work period: {0}")]
    InvalidPeriod(String),

    #[error("Date {0} is not part of the current period")]
    DayNotInPeriod(String),

    // ---------------------------
    // Upload / provider errors
    // ---------------------------
    #[error("Upload too large: {size} bytes (limit {limit} bytes)")]
    UploadTooLarge { size: u64, limit: u64 },

    #[error("Unsupported upload type: {0}")]
    UnsupportedUpload(String),

    #[error("Employee name is required before extracting a document")]
    MissingEmployeeName,

    #[error("Extraction provider error: {0}")]
    Provider(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
