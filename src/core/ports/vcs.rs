//! Version control system port
//!
//! Defines the interface a VCS backend implements to scope linting to
//! changed files.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors reported by VCS backends
#[derive(Debug, Error)]
pub enum VcsError {
    /// `modified_files` was called with a relative root
    #[error("root has to be absolute, got: {}", .0.display())]
    RelativeRoot(PathBuf),

    /// The client could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The client ran but reported a failure
    #[error("`{command}` failed: {stderr}")]
    Command {
        /// Command line that failed
        command: String,
        /// Captured error output
        stderr: String,
    },
}

/// Version control system abstraction
///
/// Backends shell out to a VCS client and parse its textual output.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Short backend name used in logs (e.g., "svn")
    fn name(&self) -> &'static str;

    /// Find the working copy root containing `path`
    ///
    /// Returns `None` when `path` is not inside a working copy this backend
    /// understands, including when the client is missing or fails.
    fn find_root(&self, path: &Path) -> Option<PathBuf>;

    /// List source files added or modified under `root`
    ///
    /// `root` must be absolute; a relative root is a caller bug and yields
    /// [`VcsError::RelativeRoot`]. Paths come back in client output order.
    fn modified_files(&self, root: &Path) -> Result<Vec<PathBuf>, VcsError>;
}
