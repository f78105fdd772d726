//! Ordered registry of VCS backends
//!
//! Backends are probed in registration order; the first one that finds a
//! working copy root wins. New backends register by implementing
//! [`VersionControl`], nothing here needs to change.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::ports::VersionControl;

/// Registry of VCS backends, probed in order
#[derive(Default)]
pub struct VcsRegistry {
    backends: Vec<Box<dyn VersionControl>>,
}

impl fmt::Debug for VcsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VcsRegistry").field("backends", &self.names()).finish()
    }
}

/// A working copy found by one of the registered backends
pub struct DetectedRepository<'a> {
    /// Backend that recognized the working copy
    pub backend: &'a dyn VersionControl,
    /// Absolute working copy root
    pub root: PathBuf,
}

impl fmt::Debug for DetectedRepository<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectedRepository")
            .field("backend", &self.backend.name())
            .field("root", &self.root)
            .finish()
    }
}

impl VcsRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend after the existing ones
    pub fn register(&mut self, backend: Box<dyn VersionControl>) {
        self.backends.push(backend);
    }

    /// Builder-style [`register`](Self::register)
    #[must_use]
    pub fn with(mut self, backend: impl VersionControl + 'static) -> Self {
        self.register(Box::new(backend));
        self
    }

    /// Names of the registered backends, in probe order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Whether no backend is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Find the working copy containing `path`
    ///
    /// Returns the first backend whose `find_root` succeeds, together with
    /// the root it reported.
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<DetectedRepository<'_>> {
        self.backends.iter().find_map(|backend| {
            let root = backend.find_root(path)?;
            log::debug!("{} working copy root: {}", backend.name(), root.display());
            Some(DetectedRepository {
                backend: backend.as_ref(),
                root,
            })
        })
    }
}
