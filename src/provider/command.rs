//! Provider that delegates to an external program (a model CLI or a
//! wrapper script). The prompt goes to stdin; the answer is read from
//! stdout.

use super::{ExtractionProvider, ExtractionRequest};
use crate::errors::{AppError, AppResult};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

pub struct CommandProvider {
    pub program: String,
    /// Placeholders: `{file}` (upload path), `{kind}` (content kind),
    /// `{employee}` (employee name).
    pub args: Vec<String>,
}

impl CommandProvider {
    fn expand_args(&self, request: &ExtractionRequest) -> Vec<String> {
        let file = request.upload.path.display().to_string();
        self.args
            .iter()
            .map(|a| {
                a.replace("{file}", &file)
                    .replace("{kind}", request.upload.kind.as_str())
                    .replace("{employee}", &request.employee_name)
            })
            .collect()
    }
}

impl ExtractionProvider for CommandProvider {
    fn name(&self) -> &'static str {
        "command"
    }

    fn extract(&self, request: &ExtractionRequest) -> AppResult<String> {
        let mut child = Command::new(&self.program)
            .args(self.expand_args(request))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::Provider(format!("cannot start '{}': {e}", self.program)))?;

        // a program reading only `{file}` may exit before consuming stdin
        let written = match child.stdin.take() {
            Some(mut stdin) => match stdin.write_all(request.prompt.as_bytes()) {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                other => other,
            },
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        written?;
        if !output.status.success() {
            return Err(AppError::Provider(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
