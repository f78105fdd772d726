//! Run configuration
//!
//! Optional `pylint-vcs.toml` file holding defaults for the command-line
//! flags:
//!
//! ```toml
//! [lint]
//! pylint = true                 # same as --pylint
//! vcs = true                    # same as --pylint-vcs
//! rcfile = "config/pylintrc"    # same as --pylint-rcfile
//! command = "python3 -m pylint" # same as --pylint-command
//! jobs = 4                      # same as --jobs
//! ```
//!
//! Boolean flags are OR-ed with the file; valued flags override it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors loading the run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Deserialization error
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `pylint-vcs.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Linting defaults
    #[serde(default)]
    pub lint: LintConfig,
}

/// `[lint]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Lint every discovered file
    pub pylint: bool,
    /// Lint only files changed in the working copy
    pub vcs: bool,
    /// Pylint rcfile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcfile: Option<PathBuf>,
    /// Linter command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Worker threads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

/// A run configuration together with where it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// Config file path
    pub path: PathBuf,
    /// Parsed contents
    pub config: RunConfig,
}

impl LoadedConfig {
    /// Directory holding the config file
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl RunConfig {
    /// Parse a run configuration from TOML text
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a run configuration file
    pub fn load(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(LoadedConfig {
            path: path.to_path_buf(),
            config: Self::parse(&text, path)?,
        })
    }

    /// Load `explicit` if given, else the closest `pylint-vcs.toml` above `cwd`
    ///
    /// A missing file is only an error when it was named explicitly.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Option<LoadedConfig>, ConfigError> {
        let path = match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => cwd.join(path),
            None => match paths::find_run_config(cwd) {
                Some(found) => found,
                None => return Ok(None),
            },
        };
        log::debug!("Using run config {}", path.display());
        Self::load(&path).map(Some)
    }
}
