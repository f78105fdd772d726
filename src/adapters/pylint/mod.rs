//! Pylint adapter
//!
//! Runs `pylint --output-format=json [--rcfile=<rc>] <file>` once per file
//! and maps the JSON report onto [`Diagnostic`]s.
//!
//! Pylint encodes its exit status as a bit mask: 1 fatal, 2 error,
//! 4 warning, 8 refactor, 16 convention, 32 usage error. Findings alone
//! never make a run fail here; only a usage error, or a fatal exit that
//! produced no report, does.

use std::path::Path;

use serde::Deserialize;

use crate::adapters::command::{CommandOutput, CommandRunner, SystemCommandRunner};
use crate::core::models::{Category, Diagnostic};
use crate::core::ports::{DiagnosticSink, LintError, Linter};

/// Default pylint executable
pub const DEFAULT_PROGRAM: &str = "pylint";

const FATAL_BIT: i32 = 1;
const USAGE_BIT: i32 = 32;

/// One entry of pylint's JSON report
#[derive(Debug, Deserialize)]
struct JsonMessage {
    #[serde(rename = "type")]
    category: Category,
    #[serde(default)]
    module: String,
    #[serde(default)]
    obj: String,
    line: u32,
    column: u32,
    #[serde(rename = "endLine", default)]
    end_line: Option<u32>,
    #[serde(rename = "endColumn", default)]
    end_column: Option<u32>,
    #[serde(default)]
    path: String,
    symbol: String,
    message: String,
    #[serde(rename = "message-id")]
    message_id: String,
}

impl From<JsonMessage> for Diagnostic {
    fn from(msg: JsonMessage) -> Self {
        Self {
            category: msg.category,
            msg_id: msg.message_id,
            symbol: msg.symbol,
            message: msg.message,
            line: msg.line,
            column: msg.column,
            end_line: msg.end_line,
            end_column: msg.end_column,
            path: msg.path,
            module: msg.module,
            obj: msg.obj,
        }
    }
}

/// [`Linter`] backed by the pylint executable
#[derive(Debug, Clone)]
pub struct PylintLinter<R = SystemCommandRunner> {
    program: String,
    prefix_args: Vec<String>,
    runner: R,
}

impl Default for PylintLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl PylintLinter {
    /// Run `pylint` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_PROGRAM, SystemCommandRunner)
    }

    /// Run a custom command line, e.g. `python3 -m pylint`
    ///
    /// The line is split on whitespace; a blank line means plain `pylint`.
    #[must_use]
    pub fn from_command_line(command_line: &str) -> Self {
        Self::with_runner(command_line, SystemCommandRunner)
    }
}

impl<R: CommandRunner> PylintLinter<R> {
    /// Run a custom command line through a custom runner
    #[must_use]
    pub fn with_runner(command_line: &str, runner: R) -> Self {
        let mut words = command_line.split_whitespace().map(String::from);
        let program = words.next().unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        Self {
            program,
            prefix_args: words.collect(),
            runner,
        }
    }

    /// Program that will be executed
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn arguments(&self, file: &Path, rcfile: Option<&Path>) -> Vec<String> {
        let mut args = self.prefix_args.clone();
        args.push("--output-format=json".to_string());
        if let Some(rc) = rcfile {
            args.push(format!("--rcfile={}", rc.display()));
        }
        args.push(file.to_string_lossy().into_owned());
        args
    }
}

impl<R: CommandRunner> Linter for PylintLinter<R> {
    fn lint(
        &self,
        file: &Path,
        rcfile: Option<&Path>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), LintError> {
        let args = self.arguments(file, rcfile);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let output = self.runner.run(&self.program, &arg_refs, None).map_err(|source| {
            LintError::Spawn {
                program: self.program.clone(),
                source,
            }
        })?;

        for diagnostic in parse_report(file, &output)? {
            sink.record(diagnostic);
        }
        Ok(())
    }
}

/// Interpret one pylint run
///
/// # Errors
///
/// Returns [`LintError::Aborted`] for usage errors, signals, and fatal
/// exits without a report, and [`LintError::Output`] for malformed JSON.
pub fn parse_report(file: &Path, output: &CommandOutput) -> Result<Vec<Diagnostic>, LintError> {
    let aborted = |code: i32| LintError::Aborted {
        path: file.to_path_buf(),
        code,
        stderr: output.stderr.trim().to_string(),
    };

    let Some(code) = output.code else {
        return Err(aborted(-1));
    };

    let stdout = output.stdout.trim();
    if code & USAGE_BIT != 0 || (code & FATAL_BIT != 0 && stdout.is_empty()) {
        return Err(aborted(code));
    }
    if stdout.is_empty() {
        return Ok(Vec::new());
    }

    let messages: Vec<JsonMessage> =
        serde_json::from_str(stdout).map_err(|source| LintError::Output {
            path: file.to_path_buf(),
            source,
        })?;
    Ok(messages.into_iter().map(Diagnostic::from).collect())
}
