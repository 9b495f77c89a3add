//! Provider that replays a captured model answer from disk.

use super::{ExtractionProvider, ExtractionRequest};
use crate::errors::{AppError, AppResult};
use crate::utils::path::json_sidecar;
use std::fs;
use std::path::PathBuf;

/// Reads `<upload-stem>.json` next to the upload, or from `dir` when set.
pub struct ReplayProvider {
    pub dir: Option<PathBuf>,
}

impl ExtractionProvider for ReplayProvider {
    fn name(&self) -> &'static str {
        "replay"
    }

    fn extract(&self, request: &ExtractionRequest) -> AppResult<String> {
        let sidecar = json_sidecar(&request.upload.path);
        let path = match (&self.dir, sidecar.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => sidecar,
        };

        fs::read_to_string(&path).map_err(|e| {
            AppError::Provider(format!("no captured answer at {}: {e}", path.display()))
        })
    }
}
