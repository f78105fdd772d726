//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - [`command`] - External command execution seam
//! - [`svn`] - Subversion `VersionControl` backend
//! - [`git`] - Git `VersionControl` backend
//! - [`pylint`] - Pylint `Linter`
//! - [`rcfile`] - Pylint rcfile reading

pub mod command;
pub mod git;
pub mod pylint;
pub mod rcfile;
pub mod svn;

use crate::core::services::VcsRegistry;

pub use git::GitVersionControl;
pub use pylint::PylintLinter;
pub use svn::SvnVersionControl;

/// Registry with every built-in backend: svn first, then git
#[must_use]
pub fn default_registry() -> VcsRegistry {
    VcsRegistry::new().with(SvnVersionControl::new()).with(GitVersionControl::new())
}
