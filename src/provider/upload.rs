//! Upload constraints checked before any extraction request.

use crate::errors::{AppError, AppResult};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_UPLOAD_MB: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Pdf,
    Text,
    Csv,
}

impl UploadKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tif" | "tiff" | "heic" => {
                Some(UploadKind::Image)
            }
            "pdf" => Some(UploadKind::Pdf),
            "txt" | "text" => Some(UploadKind::Text),
            "csv" => Some(UploadKind::Csv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Image => "image",
            UploadKind::Pdf => "pdf",
            UploadKind::Text => "text",
            UploadKind::Csv => "csv",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub path: PathBuf,
    pub kind: UploadKind,
    pub size: u64,
}

impl Upload {
    /// Check existence, size limit and accepted content kind.
    pub fn inspect(path: &Path, max_mb: u64) -> AppResult<Self> {
        let meta = fs::metadata(path)?;
        let limit = max_mb.saturating_mul(1024 * 1024);
        if meta.len() > limit {
            return Err(AppError::UploadTooLarge {
                size: meta.len(),
                limit,
            });
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let kind = UploadKind::from_extension(ext)
            .ok_or_else(|| AppError::UnsupportedUpload(path.display().to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            kind,
            size: meta.len(),
        })
    }
}
