//! Path filtering - relative paths and ignore rules
//!
//! Pure string logic with no I/O dependencies.

use std::collections::BTreeSet;
use std::path::MAIN_SEPARATOR;

use regex::Regex;

use crate::core::models::RunPolicy;

/// Give `path` relative to `parent`
///
/// Removes the first occurrence of `parent` anywhere in `path`, then one
/// leading separator. This is substring removal, not a prefix check: a
/// `parent` that occurs later in `path` is removed from there.
///
/// ```
/// use pylint_vcs::core::services::relative_path;
///
/// assert_eq!(relative_path("/Hi/How/Are/You/blah.py", "/Hi/"), "How/Are/You/blah.py");
/// assert_eq!(relative_path("/Hi/How/Are/You/blah.py", "/Hi"), "How/Are/You/blah.py");
/// ```
#[must_use]
pub fn relative_path(path: &str, parent: &str) -> String {
    let replaced = path.replacen(parent, "", 1);
    match replaced.strip_prefix(MAIN_SEPARATOR) {
        Some(rest) => rest.to_string(),
        None => replaced,
    }
}

/// Ignore rules compiled once per run
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    segments: BTreeSet<String>,
    patterns: Vec<Regex>,
}

impl IgnoreFilter {
    /// Compile an ignore list and ignore patterns
    ///
    /// Each pattern is anchored at the start of the path but not at the
    /// end. Patterns that fail to compile are logged and skipped.
    pub fn new<'a>(
        ignore_list: impl IntoIterator<Item = &'a str>,
        ignore_patterns: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let segments = ignore_list.into_iter().map(String::from).collect();
        let patterns = ignore_patterns
            .into_iter()
            .filter_map(|pattern| match Regex::new(&format!("^(?:{pattern})")) {
                Ok(re) => Some(re),
                Err(err) => {
                    log::warn!("Skipping invalid ignore pattern '{pattern}': {err}");
                    None
                },
            })
            .collect();
        Self { segments, patterns }
    }

    /// Compile the ignore rules of a run policy
    #[must_use]
    pub fn from_policy(policy: &RunPolicy) -> Self {
        Self::new(
            policy.ignore_list.iter().map(String::as_str),
            policy.ignore_patterns.iter().map(String::as_str),
        )
    }

    /// Whether a relative path survives the ignore rules
    ///
    /// Patterns are checked first. The ignore list compares whole path
    /// segments, so `part` excludes `random/part/x.py` but not `part_it/x.py`.
    #[must_use]
    pub fn includes(&self, relative_path: &str) -> bool {
        if self.patterns.iter().any(|re| re.is_match(relative_path)) {
            return false;
        }
        !relative_path.split(MAIN_SEPARATOR).any(|segment| self.segments.contains(segment))
    }
}

/// Check a relative path against an ignore list and ignore patterns
///
/// Convenience wrapper around [`IgnoreFilter`] for one-off checks.
#[must_use]
pub fn should_include(relative_path: &str, ignore_list: &[&str], ignore_patterns: &[&str]) -> bool {
    IgnoreFilter::new(ignore_list.iter().copied(), ignore_patterns.iter().copied())
        .includes(relative_path)
}
