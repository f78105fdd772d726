//! Common test utilities shared across test types
//!
//! - `fake_pylint.rs` - Stand-in pylint executable
//! - `git_repo.rs` - Temporary git repository helper

#[cfg(unix)]
pub mod fake_pylint;
pub mod git_repo;
