//! Source-file recognition

use std::path::Path;

/// File extensions eligible for linting
pub const SOURCE_EXTENSIONS: &[&str] = &["py"];

/// Check whether a path names a lintable source file
#[must_use]
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
