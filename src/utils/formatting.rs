//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ansi regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Terminal width of a string, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Optional number with fixed decimals, or `--` when absent.
pub fn optional_number(v: Option<f64>, decimals: usize) -> String {
    v.map(|n| format!("{n:.decimals$}"))
        .unwrap_or_else(|| "--".to_string())
}

/// Kilometers as written in payroll notes: no trailing zeros.
pub fn trim_number(n: f64) -> String {
    let s = format!("{n:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// File-name friendly form of a display name: whitespace runs become `_`.
pub fn underscore_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("_")
}
