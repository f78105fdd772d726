//! Output formatting for human and JSON modes
//!
//! The run report renders either as pytest-like terminal text or as one
//! JSON document.

use std::fmt::Write as _;
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::LintOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Process exit status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Every lint unit passed
    Passed,
    /// At least one lint unit failed
    Failed,
    /// The run aborted
    Error,
    /// No lint unit was collected
    NoTests,
}

impl RunStatus {
    /// Exit code, following pytest's conventions
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
            Self::Error => 2,
            Self::NoTests => 5,
        }
    }
}

/// Width of section rules
const LINE_WIDTH: usize = 80;

/// Result of a lint run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Mode notices printed before collection
    pub notices: Vec<String>,
    /// Run root
    pub rootdir: PathBuf,
    /// Outcomes in selection order
    pub outcomes: Vec<LintOutcome>,
}

/// Summary fields added to the JSON document
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status: RunStatus,
    collected: usize,
    passed: usize,
    failed: usize,
    #[serde(flatten)]
    report: &'a RunReport,
}

impl RunReport {
    /// Number of lint units that ran
    #[must_use]
    pub fn collected(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of passed units
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of failed units
    #[must_use]
    pub fn failed(&self) -> usize {
        self.collected() - self.passed()
    }

    /// Overall status
    #[must_use]
    pub fn status(&self) -> RunStatus {
        if self.outcomes.is_empty() {
            RunStatus::NoTests
        } else if self.failed() > 0 {
            RunStatus::Failed
        } else {
            RunStatus::Passed
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                use std::io::IsTerminal;
                print!("{}", self.to_human(std::io::stdout().is_terminal()));
            },
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Terminal text, with colored status words when `color` is set
    #[must_use]
    pub fn to_human(&self, color: bool) -> String {
        let mut out = String::new();

        for notice in &self.notices {
            let _ = writeln!(out, "{notice}");
        }
        let _ = writeln!(out, "rootdir: {}", self.rootdir.display());
        let _ = writeln!(out, "collected {} item{}", self.collected(), plural(self.collected()));
        if !self.outcomes.is_empty() {
            out.push('\n');
        }

        for outcome in &self.outcomes {
            let word = status_word(outcome.passed(), color);
            let _ = writeln!(out, "{} {word}", outcome.label);
        }

        let failures: Vec<_> = self.outcomes.iter().filter(|o| !o.passed()).collect();
        if !failures.is_empty() {
            let _ = writeln!(out, "\n{}", rule(" FAILURES ", '='));
            for outcome in failures {
                let _ = writeln!(out, "{}", rule(&format!(" {} ", outcome.label), '_'));
                let _ = writeln!(out, "{}", outcome.report().unwrap_or_default());
            }
        }

        let _ = writeln!(out, "{}", rule(&format!(" {} ", self.summary()), '='));
        out
    }

    /// Pretty-printed JSON document
    #[must_use]
    pub fn to_json(&self) -> String {
        let doc = JsonReport {
            status: self.status(),
            collected: self.collected(),
            passed: self.passed(),
            failed: self.failed(),
            report: self,
        };
        serde_json::to_string_pretty(&doc).unwrap_or_default()
    }

    fn summary(&self) -> String {
        match (self.failed(), self.passed()) {
            (0, 0) => "no tests ran".to_string(),
            (0, passed) => format!("{passed} passed"),
            (failed, 0) => format!("{failed} failed"),
            (failed, passed) => format!("{failed} failed, {passed} passed"),
        }
    }
}

fn status_word(passed: bool, color: bool) -> String {
    match (passed, color) {
        (true, true) => "PASSED".green().to_string(),
        (true, false) => "PASSED".to_string(),
        (false, true) => "FAILED".red().to_string(),
        (false, false) => "FAILED".to_string(),
    }
}

/// `title` centered in a line of `fill` characters
fn rule(title: &str, fill: char) -> String {
    let len = title.chars().count();
    if len >= LINE_WIDTH {
        return title.to_string();
    }
    let left = (LINE_WIDTH - len) / 2;
    let right = LINE_WIDTH - len - left;
    format!("{}{title}{}", fill.to_string().repeat(left), fill.to_string().repeat(right))
}

const fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
