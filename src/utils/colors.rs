/// ANSI color helper utilities for terminal output.
use crate::models::ConfidenceLevel;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Low confidence → red, medium → yellow; high and unknown are not flagged.
pub fn color_for_confidence(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::Low => RED,
        ConfidenceLevel::Medium => YELLOW,
        ConfidenceLevel::High | ConfidenceLevel::Unknown => RESET,
    }
}

/// Wrap a cell in the confidence color; empty cells are greyed instead.
///
/// Esempio:
/// `colorize_cell("--:--", Low)` → "<grey>--:--<reset>"
pub fn colorize_cell(value: &str, level: ConfidenceLevel) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "--" {
        return format!("{GREY}{value}{RESET}");
    }

    match color_for_confidence(level) {
        RESET => value.to_string(),
        color => format!("{color}{value}{RESET}"),
    }
}

pub fn color_for_hours(hours: f64) -> &'static str {
    if hours > 0.0 { GREEN } else { GREY }
}
