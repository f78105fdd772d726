//! Lint tasks and their outcomes
//!
//! A [`LintTask`] is created for every selected file and executed exactly
//! once. Running it yields a [`LintOutcome`], which is either passed (no
//! diagnostics) or failed with the rendered report.

use std::path::PathBuf;

use serde::Serialize;

use super::Diagnostic;

/// Tag shown in front of every task label
pub const LABEL_TAG: &str = "[pylint]";

/// Lint one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintTask {
    /// Absolute path of the file to lint
    pub file_path: PathBuf,
    /// Path relative to the run root, used for display
    pub relative_path: String,
    /// Pylint rcfile to pass along
    pub rcfile: Option<PathBuf>,
    /// Message template for the failure report
    pub message_template: Option<String>,
}

impl LintTask {
    /// Label under which this task is reported
    #[must_use]
    pub fn label(&self) -> String {
        format!("{LABEL_TAG} {}", self.relative_path)
    }
}

/// Terminal state of a lint task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    /// No diagnostics
    Passed,
    /// At least one diagnostic
    Failed {
        /// Rendered diagnostics, one per line
        report: String,
    },
}

/// Result of running one lint task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintOutcome {
    /// Reporting label (`[pylint] <relative path>`)
    pub label: String,
    /// Path relative to the run root
    pub relative_path: String,
    /// Absolute path of the linted file
    pub file_path: PathBuf,
    /// Every diagnostic the linter reported
    pub diagnostics: Vec<Diagnostic>,
    /// Pass or fail
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl LintOutcome {
    /// Whether the file produced no diagnostics
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Passed)
    }

    /// Failure report, if the task failed
    #[must_use]
    pub fn report(&self) -> Option<&str> {
        match &self.verdict {
            Verdict::Passed => None,
            Verdict::Failed { report } => Some(report),
        }
    }
}
