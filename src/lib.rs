//! pylint-vcs - Pylint findings as test results, optionally scoped to the
//! files changed in a version-control working copy
//!
//! This library provides file selection (all files, VCS-changed files or
//! none), the per-file lint unit, and the svn/git/pylint adapters the CLI
//! wires together.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code, unused_import_braces)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod discovery;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod session;
