//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (VCS clients, the linter executable).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations, so selection and reporting are tested against fakes.

mod linter;
mod vcs;

pub use linter::{DiagnosticSink, LintError, Linter};
#[cfg(test)]
pub use vcs::MockVersionControl;
pub use vcs::{VcsError, VersionControl};
