//! Static-analysis engine port
//!
//! The engine is an opaque collaborator: it receives one file and an
//! optional rcfile and reports every finding into a [`DiagnosticSink`].

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::Diagnostic;

/// Receives diagnostics as the engine produces them
pub trait DiagnosticSink {
    /// Record one diagnostic
    fn record(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Errors from running the engine itself (not findings)
#[derive(Debug, Error)]
pub enum LintError {
    /// The engine executable could not be started
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        /// Program that was attempted
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The engine aborted without producing a result
    #[error("linter failed on {} (exit code {code}): {stderr}", .path.display())]
    Aborted {
        /// File being linted
        path: PathBuf,
        /// Exit code, or -1 when killed by a signal
        code: i32,
        /// Captured error output
        stderr: String,
    },

    /// The engine output could not be parsed
    #[error("unreadable linter output for {}: {source}", .path.display())]
    Output {
        /// File being linted
        path: PathBuf,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Static-analysis engine
pub trait Linter: Send + Sync {
    /// Lint exactly one file, reporting every finding into `sink`
    fn lint(
        &self,
        file: &Path,
        rcfile: Option<&Path>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), LintError>;
}
