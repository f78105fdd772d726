//! Session start
//!
//! Resolves, once per run, the effective linting mode and rule
//! configuration:
//!
//! 1. `enabled = (pylint || vcs) && !no_pylint`; a disabled run resolves
//!    nothing else
//! 2. VCS scoping: `--pylint-no-vcs` wins, otherwise the registry is probed
//!    and the changed-file set computed eagerly
//! 3. rcfile: explicit path, else pylint's default, retried next to the
//!    run config file
//! 4. rcfile options: ignore list, ignore patterns, message template

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::adapters::rcfile::{RcfileError, RuleConfig};
use crate::core::models::{ChangedFileSet, RunPolicy, Session, VcsStatus};
use crate::core::ports::VcsError;
use crate::core::services::VcsRegistry;
use crate::paths;

/// Errors that abort session start
#[derive(Debug, Error)]
pub enum SessionError {
    /// A VCS backend was misused
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// The rcfile exists but cannot be read
    #[error(transparent)]
    Rcfile(#[from] RcfileError),
}

/// Inputs to session start, already merged from CLI and run config
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SessionOptions {
    /// Lint every discovered file
    pub pylint: bool,
    /// Lint only changed files
    pub vcs: bool,
    /// Force-disable linting
    pub no_pylint: bool,
    /// Disable VCS scoping only
    pub no_vcs: bool,
    /// Explicit rcfile (CLI, then run config)
    pub rcfile: Option<PathBuf>,
    /// Directory of the run config file, if one was loaded
    pub config_dir: Option<PathBuf>,
    /// Working directory relative paths resolve against
    pub cwd: PathBuf,
}

impl SessionOptions {
    /// Whether any linting happens at all
    #[must_use]
    pub const fn enabled(&self) -> bool {
        (self.pylint || self.vcs) && !self.no_pylint
    }
}

/// Start a session rooted at `root`
///
/// VCS trouble other than a relative root only downgrades the run to full
/// mode. An unreadable rcfile aborts.
pub fn start_session(
    root: &Path,
    options: &SessionOptions,
    registry: &VcsRegistry,
) -> Result<Session, SessionError> {
    if !options.enabled() {
        log::debug!("Linting disabled");
        return Ok(Session::disabled(root));
    }

    let (vcs_status, changed_files) = if options.no_vcs {
        (VcsStatus::DisabledByFlag, None)
    } else if options.vcs {
        probe_vcs(root, registry)?
    } else {
        (VcsStatus::Off, None)
    };

    let candidate = options.rcfile.clone().or_else(|| paths::default_pylintrc(&options.cwd));
    let rcfile = candidate.and_then(|candidate| {
        locate_rcfile(&candidate, &options.cwd, options.config_dir.as_deref())
    });

    let rules = match &rcfile {
        Some(path) => {
            log::debug!("Reading rcfile {}", path.display());
            RuleConfig::load(path)?
        },
        None => RuleConfig::default(),
    };

    let policy = RunPolicy {
        enabled: true,
        vcs_scoped: false,
        rcfile,
        ignore_list: rules.ignore_list,
        ignore_patterns: rules.ignore_patterns,
        message_template: rules.message_template,
        vcs_status,
    };
    Ok(Session::new(root, policy, changed_files))
}

/// Resolve an rcfile candidate to an existing file
///
/// Relative candidates are tried against `cwd`, then against the run
/// config directory.
#[must_use]
pub fn locate_rcfile(candidate: &Path, cwd: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    let primary = cwd.join(candidate);
    if primary.is_file() {
        return Some(primary);
    }

    let retry = config_dir.map(|dir| dir.join(candidate)).filter(|path| path.is_file());
    if retry.is_none() {
        log::debug!("No rcfile at {}", candidate.display());
    }
    retry
}

fn probe_vcs(
    root: &Path,
    registry: &VcsRegistry,
) -> Result<(VcsStatus, Option<ChangedFileSet>), VcsError> {
    let Some(found) = registry.detect(root) else {
        return Ok((VcsStatus::NotDetected, None));
    };

    let backend = found.backend.name();
    match found.backend.modified_files(&found.root) {
        Ok(reported) => {
            let changed = ChangedFileSet::from_reported(&found.root, reported);
            log::debug!("{backend}: {} changed source file(s) under {}", changed.len(), found.root.display());
            for file in changed.iter() {
                log::trace!("changed: {}", file.display());
            }
            let status = VcsStatus::Detected {
                backend: backend.to_string(),
                root: found.root,
            };
            Ok((status, Some(changed)))
        },
        Err(err @ VcsError::RelativeRoot(_)) => Err(err),
        Err(err) => {
            log::warn!("Could not list {backend} changes, linting all the files: {err}");
            Ok((VcsStatus::NotDetected, None))
        },
    }
}
