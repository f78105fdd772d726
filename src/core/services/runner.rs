//! Lint task execution
//!
//! A task goes Created → Running → Passed or Failed, exactly once. The
//! linter is invoked a single time per task and every diagnostic it
//! reports fails the task, whatever its category.

use rayon::prelude::*;

use crate::core::models::{Diagnostic, LintOutcome, LintTask, Verdict};
use crate::core::ports::{LintError, Linter};

use super::template::MessageTemplate;

/// Executes lint tasks against a linter
#[derive(Debug)]
pub struct Runner<'a, L: ?Sized> {
    linter: &'a L,
}

impl<'a, L: Linter + ?Sized> Runner<'a, L> {
    /// Create a runner
    #[must_use]
    pub const fn new(linter: &'a L) -> Self {
        Self { linter }
    }

    /// Run one task
    ///
    /// Failing to run the linter is an error, not a failed outcome.
    pub fn run(&self, task: &LintTask) -> Result<LintOutcome, LintError> {
        log::debug!("Linting {}", task.file_path.display());

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        self.linter.lint(&task.file_path, task.rcfile.as_deref(), &mut diagnostics)?;

        let verdict = if diagnostics.is_empty() {
            Verdict::Passed
        } else {
            let template = MessageTemplate::from_option(task.message_template.as_deref());
            Verdict::Failed {
                report: template.render_all(&diagnostics, &task.file_path),
            }
        };

        Ok(LintOutcome {
            label: task.label(),
            relative_path: task.relative_path.clone(),
            file_path: task.file_path.clone(),
            diagnostics,
            verdict,
        })
    }

    /// Run tasks in parallel on the current rayon pool
    ///
    /// Outcomes come back in task order. The first linter error aborts
    /// the whole run.
    pub fn run_all(&self, tasks: &[LintTask]) -> Result<Vec<LintOutcome>, LintError> {
        tasks.par_iter().map(|task| self.run(task)).collect()
    }
}
