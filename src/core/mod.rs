//! Core domain logic for pylint-vcs
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Diagnostic, RunPolicy, Session, LintTask)
//! - `services/` - Selection, execution and rendering
//! - `ports/` - Trait definitions for the linter and VCS backends

pub mod models;
pub mod ports;
pub mod services;
