//! External linter adapter.
//!
//! The engine treats linter output as one opaque, pre-formatted text block:
//! no structure is assumed beyond "a string", which keeps the collaborator
//! substitutable in tests.

use crate::config::LintConfig;
use crate::core::errors::{Error, Result};
use std::path::Path;
use std::process::Command;

pub trait Linter {
    fn run(&self, path: &Path) -> Result<String>;
}

/// Runs a linter executable found on PATH and captures its report.
pub struct CommandLinter {
    program: String,
    args: Vec<String>,
}

impl CommandLinter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &LintConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }
}

impl Linter for CommandLinter {
    fn run(&self, path: &Path) -> Result<String> {
        let program = which::which(&self.program)
            .map_err(|_| Error::lint(format!("linter '{}' not found on PATH", self.program)))?;

        log::debug!("Running linter: {} {}", program.display(), path.display());

        let output = Command::new(&program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| Error::lint(format!("failed to run '{}': {e}", self.program)))?;

        // Linters exit non-zero when they have findings; the text is the
        // report either way.
        let report = String::from_utf8_lossy(&output.stdout).into_owned();
        if report.trim().is_empty() {
            return Ok(String::from_utf8_lossy(&output.stderr).into_owned());
        }
        Ok(report)
    }
}
