//! Run-wide lint policy
//!
//! Everything here is resolved once when a run starts and is read-only
//! afterwards. Lint tasks only ever borrow it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::source::is_source_file;

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunPolicy {
    /// Whether any lint task may be produced
    pub enabled: bool,
    /// Whether selection is restricted to VCS-changed files
    pub vcs_scoped: bool,
    /// Resolved pylint rcfile, if one exists
    pub rcfile: Option<PathBuf>,
    /// Path segments to skip (`MASTER.ignore`)
    pub ignore_list: BTreeSet<String>,
    /// Regexes matched at the start of relative paths (`MASTER.ignore-patterns`)
    pub ignore_patterns: Vec<String>,
    /// Message template (`REPORTS.msg-template`)
    pub message_template: Option<String>,
    /// What happened when VCS scoping was requested
    pub vcs_status: VcsStatus,
}

impl RunPolicy {
    /// A policy that never produces lint tasks
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Outcome of the VCS probe at session start
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VcsStatus {
    /// VCS scoping was not requested
    #[default]
    Off,
    /// VCS scoping was switched off with `--pylint-no-vcs`
    DisabledByFlag,
    /// A working copy was found and its changed files listed
    Detected {
        /// Backend that recognized the working copy
        backend: String,
        /// Working copy root
        root: PathBuf,
    },
    /// No working copy found; every source file is linted
    NotDetected,
}

impl VcsStatus {
    /// Line printed to the run output for this status
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Off => None,
            Self::DisabledByFlag => Some("VCS linting mode set to disabled"),
            Self::Detected { .. } => Some("VCS working copy detected. VCS linting mode enabled"),
            Self::NotDetected => {
                Some("No VCS working copy detected. VCS linting mode disabled: linting all the files")
            },
        }
    }
}

/// Absolute paths of source files added or modified in the working copy
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChangedFileSet {
    files: BTreeSet<PathBuf>,
}

impl ChangedFileSet {
    /// Build the set from paths reported by a VCS backend
    ///
    /// Relative paths are resolved against `root`. Anything that is not a
    /// source file (directories, data files) is dropped here so membership
    /// checks never have to care.
    #[must_use]
    pub fn from_reported(root: &Path, reported: impl IntoIterator<Item = PathBuf>) -> Self {
        let files = reported
            .into_iter()
            .map(|path| if path.is_absolute() { path } else { root.join(path) })
            .filter(|path| is_source_file(path))
            .collect();
        Self { files }
    }

    /// Check whether an absolute path was changed
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    /// Number of changed source files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no source file changed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over the changed files in path order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }
}

/// The resolved state of one run: root, policy and changed files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: PathBuf,
    policy: RunPolicy,
    changed_files: Option<ChangedFileSet>,
}

impl Session {
    /// Assemble a session
    ///
    /// `policy.vcs_scoped` is derived from whether a changed-file set is
    /// given, and a disabled policy never carries one.
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        mut policy: RunPolicy,
        changed_files: Option<ChangedFileSet>,
    ) -> Self {
        let changed_files = changed_files.filter(|_| policy.enabled);
        policy.vcs_scoped = changed_files.is_some();
        Self {
            root: root.into(),
            policy,
            changed_files,
        }
    }

    /// A session in which nothing is linted
    #[must_use]
    pub fn disabled(root: impl Into<PathBuf>) -> Self {
        Self::new(root, RunPolicy::disabled(), None)
    }

    /// Run root that relative paths are computed against
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Effective policy
    #[must_use]
    pub const fn policy(&self) -> &RunPolicy {
        &self.policy
    }

    /// Changed files, present only in VCS-scoped mode
    #[must_use]
    pub const fn changed_files(&self) -> Option<&ChangedFileSet> {
        self.changed_files.as_ref()
    }
}
