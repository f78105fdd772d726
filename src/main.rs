//! pylint-vcs - Pylint as a test run, optionally scoped to the files
//! changed in a version-control working copy

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code, unused_import_braces)]
#![warn(missing_debug_implementations, trivial_casts, trivial_numeric_casts, unused_qualifications)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

use pylint_vcs::output::RunStatus;

/// Main entry point for the pylint-vcs CLI
fn main() {
    let code = match cli::run() {
        Ok(status) => status.code(),
        Err(err) => {
            eprintln!("error: {err:#}");
            RunStatus::Error.code()
        },
    };
    std::process::exit(code);
}
