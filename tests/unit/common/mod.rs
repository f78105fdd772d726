//! Shared test fixtures and fakes
//!
//! - [`TestProject`] - temporary project tree
//! - [`FakeVersionControl`] - VCS backend with a fixed answer
//! - [`FakeLinter`] - linter reporting canned diagnostics by file name

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pylint_vcs::core::models::{Category, Diagnostic};
use pylint_vcs::core::ports::{DiagnosticSink, LintError, Linter, VcsError, VersionControl};
use tempfile::TempDir;

/// A temporary project directory
pub struct TestProject {
    _dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    /// Create an empty project
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        // Discovery canonicalizes roots; compare against the same form
        let root = fs::canonicalize(dir.path()).expect("failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    /// Project root (canonical)
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write a file, creating parent directories
    pub fn add_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// VCS backend that reports a fixed root and file list
pub struct FakeVersionControl {
    root: Option<PathBuf>,
    files: Vec<PathBuf>,
    fail_listing: bool,
}

impl FakeVersionControl {
    /// No working copy anywhere
    pub fn absent() -> Self {
        Self {
            root: None,
            files: Vec::new(),
            fail_listing: false,
        }
    }

    /// Working copy at `root` reporting `files` as changed
    pub fn at(root: &Path, files: Vec<PathBuf>) -> Self {
        Self {
            root: Some(root.to_path_buf()),
            files,
            fail_listing: false,
        }
    }

    /// Working copy at `root` whose change listing fails
    pub fn broken(root: &Path) -> Self {
        Self {
            root: Some(root.to_path_buf()),
            files: Vec::new(),
            fail_listing: true,
        }
    }
}

impl VersionControl for FakeVersionControl {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn find_root(&self, _path: &Path) -> Option<PathBuf> {
        self.root.clone()
    }

    fn modified_files(&self, root: &Path) -> Result<Vec<PathBuf>, VcsError> {
        if !root.is_absolute() {
            return Err(VcsError::RelativeRoot(root.to_path_buf()));
        }
        if self.fail_listing {
            return Err(VcsError::Command {
                command: "fake diff".to_string(),
                stderr: "no history".to_string(),
            });
        }
        Ok(self.files.clone())
    }
}

/// Linter answering from a table keyed by file name
#[derive(Default)]
pub struct FakeLinter {
    findings: HashMap<String, Vec<Diagnostic>>,
    seen: Mutex<Vec<(PathBuf, Option<PathBuf>)>>,
}

impl FakeLinter {
    /// Linter that finds nothing
    pub fn clean() -> Self {
        Self::default()
    }

    /// Report `diagnostic` for every file named `file_name`
    pub fn with_finding(mut self, file_name: &str, diagnostic: Diagnostic) -> Self {
        self.findings.entry(file_name.to_string()).or_default().push(diagnostic);
        self
    }

    /// Files linted so far with the rcfile each got, sorted
    pub fn seen(&self) -> Vec<(PathBuf, Option<PathBuf>)> {
        let mut seen = self.seen.lock().unwrap().clone();
        seen.sort();
        seen
    }
}

impl Linter for FakeLinter {
    fn lint(
        &self,
        file: &Path,
        rcfile: Option<&Path>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), LintError> {
        self.seen.lock().unwrap().push((file.to_path_buf(), rcfile.map(Path::to_path_buf)));
        let name = file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        for diagnostic in self.findings.get(&name).into_iter().flatten() {
            sink.record(diagnostic.clone());
        }
        Ok(())
    }
}

/// What pylint reports for a module containing only `import sys`, with no
/// trailing newline
pub fn import_sys_findings() -> Vec<Diagnostic> {
    vec![
        Diagnostic::new(
            Category::Convention,
            "C0304",
            "missing-final-newline",
            "Final newline missing",
            1,
            0,
        ),
        Diagnostic::new(
            Category::Convention,
            "C0114",
            "missing-module-docstring",
            "Missing module docstring",
            1,
            0,
        ),
        Diagnostic::new(Category::Warning, "W0611", "unused-import", "Unused import sys", 1, 0),
    ]
}
