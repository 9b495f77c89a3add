//! Path utilities: expand ~, resolve sidecar files, etc.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<dir>/<stem>.json` for an upload at `<dir>/<stem>.<ext>`.
pub fn json_sidecar(path: &Path) -> PathBuf {
    path.with_extension("json")
}
