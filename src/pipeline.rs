//! Lint run pipeline
//!
//! Session start → discovery → selection → parallel execution → report.
//! The CLI builds a [`RunRequest`]; everything after that lives here so it
//! can run against any registry and linter.

use std::fs;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::core::ports::{LintError, Linter};
use crate::core::services::{Runner, Selector, VcsRegistry};
use crate::discovery::{Discovery, DiscoveryError};
use crate::output::RunReport;
use crate::session::{SessionError, SessionOptions, start_session};

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    /// Session could not start
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Candidate files could not be listed
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// The linter itself failed
    #[error(transparent)]
    Lint(#[from] LintError),

    /// Worker pool could not be built
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Everything a run needs besides its collaborators
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Files and directories to collect from; empty means the working directory
    pub paths: Vec<PathBuf>,
    /// Merged CLI and run config options
    pub options: SessionOptions,
    /// Worker threads; `None` uses one per core
    pub jobs: Option<usize>,
}

/// Run the whole pipeline
pub fn execute<L>(
    request: &RunRequest,
    registry: &VcsRegistry,
    linter: &L,
) -> Result<RunReport, RunError>
where
    L: Linter + ?Sized,
{
    let options = &request.options;
    let roots = canonical_roots(&request.paths, &options.cwd)?;
    let rootdir = run_root(options.config_dir.as_deref(), &roots, &options.cwd);
    log::debug!("rootdir: {}", rootdir.display());

    let session = start_session(&rootdir, options, registry)?;
    let notices = session.policy().vcs_status.notice().map(String::from).into_iter().collect();

    if !session.policy().enabled {
        return Ok(RunReport {
            notices,
            rootdir,
            outcomes: Vec::new(),
        });
    }

    let files = Discovery::new(&roots)?.find_files()?;
    let tasks = Selector::new(&session).select_all(&files);
    log::debug!("Selected {} of {} file(s)", tasks.len(), files.len());

    let runner = Runner::new(linter);
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = request.jobs {
        builder = builder.num_threads(jobs);
    }
    let outcomes = builder.build()?.install(|| runner.run_all(&tasks))?;

    Ok(RunReport {
        notices,
        rootdir,
        outcomes,
    })
}

/// Absolute, symlink-free run roots
fn canonical_roots(paths: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if paths.is_empty() {
        return canonical(cwd).map(|root| vec![root]);
    }
    paths.iter().map(|path| canonical(&cwd.join(path))).collect()
}

fn canonical(path: &Path) -> Result<PathBuf, DiscoveryError> {
    fs::canonicalize(path).map_err(|_| DiscoveryError::RootNotFound(path.to_path_buf()))
}

/// Directory relative paths are reported against
///
/// The run config directory if there is one, else the deepest directory
/// containing every root, else the working directory.
#[must_use]
pub fn run_root(config_dir: Option<&Path>, roots: &[PathBuf], cwd: &Path) -> PathBuf {
    if let Some(dir) = config_dir {
        return fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    }

    let dirs: Vec<&Path> = roots
        .iter()
        .map(|root| if root.is_file() { root.parent().unwrap_or(root) } else { root.as_path() })
        .collect();

    common_ancestor(&dirs).unwrap_or_else(|| fs::canonicalize(cwd).unwrap_or_else(|_| cwd.to_path_buf()))
}

fn common_ancestor(paths: &[&Path]) -> Option<PathBuf> {
    let (first, rest) = paths.split_first()?;
    let mut common: Vec<Component<'_>> = first.components().collect();
    for path in rest {
        let shared = common.iter().zip(path.components()).take_while(|(a, b)| **a == *b).count();
        common.truncate(shared);
    }
    if common.is_empty() { None } else { Some(common.iter().collect()) }
}
