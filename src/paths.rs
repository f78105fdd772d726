//! Centralized path definitions for pylint-vcs
//!
//! Single source of truth for the file names the tool looks for:
//!
//! ```text
//! project/
//! ├── pylint-vcs.toml      # run config, found by walking up from cwd
//! └── pylintrc             # pylint rule config (or .pylintrc)
//!
//! ~/.pylintrc              # user-level pylint config
//! ~/.config/pylintrc
//! /etc/pylintrc            # system-wide pylint config
//! ```

use std::path::{Path, PathBuf};

/// Run configuration filename
pub const RUN_CONFIG_FILE: &str = "pylint-vcs.toml";

/// Environment variable pylint reads an rcfile location from
pub const PYLINTRC_ENV: &str = "PYLINTRC";

/// Rcfile names looked up in the working directory, in order
const LOCAL_RCFILES: &[&str] = &["pylintrc", ".pylintrc"];

/// System-wide rcfile
const SYSTEM_RCFILE: &str = "/etc/pylintrc";

/// Find `pylint-vcs.toml` in `start` or its closest ancestor.
#[must_use]
pub fn find_run_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(RUN_CONFIG_FILE)).find(|candidate| candidate.is_file())
}

/// Rcfile locations pylint checks when none is given, in its lookup order.
///
/// Candidates are not checked for existence.
#[must_use]
pub fn pylintrc_candidates(cwd: &Path) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = LOCAL_RCFILES.iter().map(|name| cwd.join(name)).collect();

    if let Some(env) = std::env::var_os(PYLINTRC_ENV).filter(|value| !value.is_empty()) {
        candidates.push(PathBuf::from(env));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".pylintrc"));
        candidates.push(home.join(".config").join("pylintrc"));
    }
    candidates.push(PathBuf::from(SYSTEM_RCFILE));
    candidates
}

/// The rcfile pylint would pick on its own, if any.
#[must_use]
pub fn default_pylintrc(cwd: &Path) -> Option<PathBuf> {
    pylintrc_candidates(cwd).into_iter().find(|candidate| candidate.is_file())
}
