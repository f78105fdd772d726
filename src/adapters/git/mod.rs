//! Git adapter
//!
//! Implements [`VersionControl`] using git commands. The change set is the
//! last commit: `git diff -z --no-renames --name-status HEAD~1 HEAD`,
//! keeping added and modified entries. Renames are reported as a delete
//! plus an add, so a moved file is linted under its new path.

use std::path::{Path, PathBuf};

use crate::adapters::command::{CommandRunner, SystemCommandRunner, display_command};
use crate::core::models::is_source_file;
use crate::core::ports::{VcsError, VersionControl};

const GIT: &str = "git";

const DIFF_ARGS: [&str; 8] =
    ["-c", "core.quotePath=false", "diff", "-z", "--no-renames", "--name-status", "HEAD~1", "HEAD"];

/// Git-based version control implementation
#[derive(Debug, Clone, Default)]
pub struct GitVersionControl<R = SystemCommandRunner> {
    runner: R,
}

impl GitVersionControl {
    /// Create a git adapter running the real `git` client
    #[must_use]
    pub const fn new() -> Self {
        Self {
            runner: SystemCommandRunner,
        }
    }
}

impl<R: CommandRunner> GitVersionControl<R> {
    /// Create a git adapter with a custom command runner
    #[must_use]
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> VersionControl for GitVersionControl<R> {
    fn name(&self) -> &'static str {
        GIT
    }

    fn find_root(&self, path: &Path) -> Option<PathBuf> {
        // git needs a directory to start from
        let workdir = if path.is_file() { path.parent().unwrap_or(path) } else { path };

        let output = match self.runner.run(GIT, &["rev-parse", "--show-toplevel"], Some(workdir)) {
            Ok(output) => output,
            Err(err) => {
                log::debug!("git unavailable: {err}");
                return None;
            },
        };

        if !output.success() {
            log::debug!("{} is not inside a git work tree", workdir.display());
            return None;
        }

        let root = output.stdout.trim();
        if root.is_empty() { None } else { Some(PathBuf::from(root)) }
    }

    fn modified_files(&self, root: &Path) -> Result<Vec<PathBuf>, VcsError> {
        if !root.is_absolute() {
            return Err(VcsError::RelativeRoot(root.to_path_buf()));
        }

        let args = DIFF_ARGS;
        let output = self.runner.run(GIT, &args, Some(root)).map_err(|source| VcsError::Spawn {
            command: display_command(GIT, &args),
            source,
        })?;

        if !output.success() {
            return Err(VcsError::Command {
                command: display_command(GIT, &args),
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(parse_name_status(&output.stdout))
    }
}

/// Extract added/modified source files from `git diff -z --name-status`
///
/// Records are NUL-separated: a status field followed by one path, or two
/// for copies and renames, where the destination is kept. Paths stay
/// relative to the repository root, in output order.
#[must_use]
pub fn parse_name_status(output: &str) -> Vec<PathBuf> {
    let mut fields = output.split('\0');
    let mut files = Vec::new();

    while let Some(status) = fields.next() {
        if status.is_empty() {
            continue;
        }
        let kind = status.chars().next();
        let path = match kind {
            Some('R' | 'C') => fields.nth(1),
            _ => fields.next(),
        };
        let Some(path) = path.filter(|path| !path.is_empty()) else {
            break;
        };
        if matches!(kind, Some('A' | 'M' | 'R' | 'C')) && is_source_file(Path::new(path)) {
            files.push(PathBuf::from(path));
        }
    }

    files
}
