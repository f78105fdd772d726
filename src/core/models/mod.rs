//! Domain models for pylint-vcs
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Diagnostic`] - one linter finding
//! - [`Category`] - pylint message category
//! - [`RunPolicy`] / [`Session`] - run-wide settings resolved at start
//! - [`ChangedFileSet`] - files changed in the working copy
//! - [`LintTask`] / [`LintOutcome`] - one file's check and its result

mod category;
mod diagnostic;
mod policy;
mod source;
mod task;

pub use category::Category;
pub use diagnostic::Diagnostic;
pub use policy::{ChangedFileSet, RunPolicy, Session, VcsStatus};
pub use source::{SOURCE_EXTENSIONS, is_source_file};
pub use task::{LABEL_TAG, LintOutcome, LintTask, Verdict};
