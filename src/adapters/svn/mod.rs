//! Subversion adapter
//!
//! Implements [`VersionControl`] by shelling out to the `svn` client:
//!
//! - root: `svn info <path>`, field `Working Copy Root Path:`
//! - changes: `svn diff --summarize -r PREV:COMMITTED <root>`, keeping
//!   added/modified source files

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::adapters::command::{CommandRunner, SystemCommandRunner, display_command};
use crate::core::models::SOURCE_EXTENSIONS;
use crate::core::ports::{VcsError, VersionControl};

const SVN: &str = "svn";

const TROUBLESHOOT_HINT: &str = "Svn is not installed, of unsupported version or working copy is \
                                 damaged. Hint: run `svn info .` inside the working copy to trace \
                                 the root cause";

static ROOT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^Working Copy Root Path:[ \t]+(.+?)[ \t\r]*$")
        .expect("Invalid regex pattern for svn info root")
});

static MODIFIED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Status flags limited to added/modified; deletions never match
    let extensions = SOURCE_EXTENSIONS.join("|");
    Regex::new(&format!(r"(?m)^\s*[ AM]+\s+([/\w\-. ]+\.(?:{extensions}))\r?$"))
        .expect("Invalid regex pattern for svn diff summary")
});

/// Subversion-backed version control
#[derive(Debug, Clone, Default)]
pub struct SvnVersionControl<R = SystemCommandRunner> {
    runner: R,
}

impl SvnVersionControl {
    /// Create an adapter that runs the real `svn` client
    #[must_use]
    pub const fn new() -> Self {
        Self {
            runner: SystemCommandRunner,
        }
    }
}

impl<R: CommandRunner> SvnVersionControl<R> {
    /// Create an adapter with a custom command runner
    #[must_use]
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> VersionControl for SvnVersionControl<R> {
    fn name(&self) -> &'static str {
        SVN
    }

    fn find_root(&self, path: &Path) -> Option<PathBuf> {
        let path_arg = path.to_string_lossy();
        let args = ["info", path_arg.as_ref()];

        match self.runner.run(SVN, &args, None) {
            Ok(output) if output.success() => {
                let root = parse_root(&output.stdout);
                if root.is_none() {
                    log::warn!("{TROUBLESHOOT_HINT}: {}", output.stdout.trim());
                }
                root
            },
            Ok(output) => {
                log::warn!("{TROUBLESHOOT_HINT}: {}", output.stderr.trim());
                None
            },
            Err(err) => {
                log::warn!("{TROUBLESHOOT_HINT}: {err}");
                None
            },
        }
    }

    fn modified_files(&self, root: &Path) -> Result<Vec<PathBuf>, VcsError> {
        if !root.is_absolute() {
            return Err(VcsError::RelativeRoot(root.to_path_buf()));
        }

        let root_arg = root.to_string_lossy();
        let args = ["diff", "--summarize", "-r", "PREV:COMMITTED", root_arg.as_ref()];
        let output = self.runner.run(SVN, &args, None).map_err(|source| VcsError::Spawn {
            command: display_command(SVN, &args),
            source,
        })?;

        if !output.success() {
            return Err(VcsError::Command {
                command: display_command(SVN, &args),
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(parse_modified(&output.stdout))
    }
}

/// Extract the working copy root from `svn info` output
#[must_use]
pub fn parse_root(info: &str) -> Option<PathBuf> {
    ROOT_REGEX.captures(info).map(|caps| PathBuf::from(&caps[1]))
}

/// Extract added/modified source files from `svn diff --summarize` output
///
/// Paths are returned in output order. Deleted entries, directories and
/// non-source files never match.
#[must_use]
pub fn parse_modified(summary: &str) -> Vec<PathBuf> {
    MODIFIED_REGEX.captures_iter(summary).map(|caps| PathBuf::from(&caps[1])).collect()
}
