//! Discovery - lists candidate files under the run roots
//!
//! Works like a test collector: files named directly are always
//! candidates, directories are walked recursively, skipping hidden entries
//! and the usual build/environment directories.
//!
//! # Examples
//!
//! ```no_run
//! use pylint_vcs::discovery::Discovery;
//!
//! let discovery = Discovery::new(["src", "tests"]).unwrap();
//! let files = discovery.find_files().unwrap();
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Directory names never descended into
const NORECURSE_DIRS: &[&str] =
    &["build", "dist", "node_modules", "venv", "CVS", "_darcs", "{arch}", "__pycache__"];

/// Errors that can occur during discovery
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A run root does not exist
    #[error("path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Candidate file discovery over a set of roots
#[derive(Debug, Clone)]
pub struct Discovery {
    roots: Vec<PathBuf>,
}

impl Discovery {
    /// Create a discovery over existing files or directories
    pub fn new<I, P>(roots: I) -> Result<Self, DiscoveryError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let roots = roots
            .into_iter()
            .map(|root| {
                let root = root.as_ref();
                if root.exists() {
                    Ok(root.to_path_buf())
                } else {
                    Err(DiscoveryError::RootNotFound(root.to_path_buf()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { roots })
    }

    /// All candidate files, sorted and deduplicated
    pub fn find_files(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        let mut files = BTreeSet::new();

        for root in &self.roots {
            if root.is_file() {
                files.insert(root.clone());
                continue;
            }

            for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
                // Don't filter the root directory itself
                e.path() == root || !Self::is_skipped(e)
            }) {
                let entry = entry?;
                if entry.file_type().is_file() {
                    files.insert(entry.into_path());
                }
            }
        }

        log::debug!("Discovered {} file(s) under {} root(s)", files.len(), self.roots.len());
        Ok(files.into_iter().collect())
    }

    /// Hidden entries and non-recursed directories
    fn is_skipped(entry: &walkdir::DirEntry) -> bool {
        let Some(name) = entry.file_name().to_str() else {
            return false;
        };
        if name.starts_with('.') {
            return true;
        }
        entry.file_type().is_dir()
            && (NORECURSE_DIRS.contains(&name) || name.ends_with(".egg"))
    }
}
