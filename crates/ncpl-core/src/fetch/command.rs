//! Rendered share page via an external command.
//!
//! The command receives the share URL as its last argument and must print
//! the page DOM after scripts ran, e.g. `chromium --headless --dump-dom`.

use std::process::Command;

use super::HtmlFetcher;
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct CommandFetcher {
    program: String,
    args: Vec<String>,
}

impl CommandFetcher {
    /// Builds a fetcher from `[program, args...]`; `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn failure(&self, reason: impl Into<String>) -> FetchError {
        FetchError::Command {
            program: self.program.clone(),
            reason: reason.into(),
        }
    }
}

impl HtmlFetcher for CommandFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(program = %self.program, url, "running render command");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .output()
            .map_err(|e| self.failure(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let first_line = stderr.lines().next().unwrap_or("").trim();
            return Err(self.failure(format!("{} {}", output.status, first_line).trim().to_string()));
        }

        let html = String::from_utf8_lossy(&output.stdout).into_owned();
        if html.trim().is_empty() {
            return Err(FetchError::Empty {
                url: url.to_string(),
            });
        }
        Ok(html)
    }
}
