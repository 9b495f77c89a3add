//! Boundary with the AI extraction collaborator.
//!
//! A provider turns one upload into the raw text answered by the model.
//! Parsing and every normalization rule live in `core::reconcile`, so
//! adapters stay interchangeable.

pub mod command;
pub mod prompt;
pub mod replay;
pub mod upload;

use crate::config::{Config, ProviderKind};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use command::CommandProvider;
use replay::ReplayProvider;
use upload::Upload;

pub struct ExtractionRequest {
    pub upload: Upload,
    pub employee_name: String,
    pub prompt: String,
}

pub trait ExtractionProvider {
    fn name(&self) -> &'static str;

    /// Raw model answer for the request.
    fn extract(&self, request: &ExtractionRequest) -> AppResult<String>;
}

/// Select the adapter configured in `cfg`.
pub fn build(cfg: &Config) -> AppResult<Box<dyn ExtractionProvider>> {
    match cfg.provider {
        ProviderKind::Replay => Ok(Box::new(ReplayProvider {
            dir: cfg.replay_dir.as_deref().map(expand_tilde),
        })),
        ProviderKind::Command => {
            let program = cfg
                .provider_command
                .clone()
                .filter(|p| !p.trim().is_empty())
                .ok_or_else(|| {
                    AppError::Config("provider 'command' needs 'provider_command'".into())
                })?;
            Ok(Box::new(CommandProvider {
                program,
                args: cfg.provider_args.clone(),
            }))
        }
    }
}
