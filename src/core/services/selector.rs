//! File selection - decides which discovered files get a lint task
//!
//! Precedence, first match wins:
//!
//! 1. linting disabled: nothing is selected
//! 2. not a source file: not selected
//! 3. VCS-scoped: selected iff the file is in the changed-file set (ignore
//!    rules do not apply in this mode)
//! 4. otherwise: selected unless an rcfile was found and its ignore rules
//!    exclude the path relative to the run root

use std::path::Path;

use crate::core::models::{LintTask, Session, is_source_file};

use super::filter::{IgnoreFilter, relative_path};

/// Turns discovered files into lint tasks for one session
#[derive(Debug)]
pub struct Selector<'a> {
    session: &'a Session,
    filter: IgnoreFilter,
    root: String,
}

impl<'a> Selector<'a> {
    /// Create a selector; ignore patterns are compiled here, once
    #[must_use]
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            filter: IgnoreFilter::from_policy(session.policy()),
            root: session.root().to_string_lossy().into_owned(),
        }
    }

    /// Decide whether `path` (absolute) should be linted
    #[must_use]
    pub fn select(&self, path: &Path) -> Option<LintTask> {
        let policy = self.session.policy();
        if !policy.enabled || !is_source_file(path) {
            return None;
        }

        let relative = relative_path(&path.to_string_lossy(), &self.root);
        if let Some(changed) = self.session.changed_files() {
            if !changed.contains(path) {
                return None;
            }
        } else if policy.rcfile.is_some() && !self.filter.includes(&relative) {
            log::debug!("Ignoring {relative}");
            return None;
        }

        Some(LintTask {
            file_path: path.to_path_buf(),
            relative_path: relative,
            rcfile: policy.rcfile.clone(),
            message_template: policy.message_template.clone(),
        })
    }

    /// Select over many files, keeping discovery order
    pub fn select_all<I, P>(&self, paths: I) -> Vec<LintTask>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().filter_map(|path| self.select(path.as_ref())).collect()
    }
}
