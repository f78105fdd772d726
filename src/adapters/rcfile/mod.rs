//! Pylint rcfile reading
//!
//! Extracts the options the session needs from a pylint rcfile:
//!
//! - `MASTER.ignore` (or `MAIN.ignore`): comma-separated path segments
//! - `MASTER.ignore-patterns` (or `MAIN.ignore-patterns`): regexes
//! - `REPORTS.msg-template`: message template
//!
//! - [`parser`] - INI reader

pub mod parser;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use parser::{IniDocument, SyntaxError};

/// Section names holding general options, in lookup order
const MASTER_SECTIONS: &[&str] = &["MASTER", "MAIN"];

const REPORTS_SECTION: &str = "REPORTS";

/// Errors reading an rcfile
#[derive(Debug, Error)]
pub enum RcfileError {
    /// The file could not be read
    #[error("failed to read rcfile {}: {source}", .path.display())]
    Io {
        /// Rcfile path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid INI
    #[error("invalid rcfile {}: {source}", .path.display())]
    Syntax {
        /// Rcfile path
        path: PathBuf,
        /// Parse error
        #[source]
        source: SyntaxError,
    },
}

/// Options taken from a pylint rcfile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleConfig {
    /// Path segments to skip
    pub ignore_list: BTreeSet<String>,
    /// Regexes matched against the start of relative paths
    pub ignore_patterns: Vec<String>,
    /// `msg-template` override
    pub message_template: Option<String>,
}

impl RuleConfig {
    /// Read and extract options from an rcfile
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid INI.
    pub fn load(path: &Path) -> Result<Self, RcfileError> {
        let text = fs::read_to_string(path).map_err(|source| RcfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = IniDocument::parse(&text).map_err(|source| RcfileError::Syntax {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_document(&doc))
    }

    /// Extract options from a parsed document; missing keys default to empty
    #[must_use]
    pub fn from_document(doc: &IniDocument) -> Self {
        let master = |key: &str| MASTER_SECTIONS.iter().find_map(|section| doc.get(section, key));

        let ignore_list = master("ignore")
            .map(|value| split_list(value, &[',']).into_iter().collect())
            .unwrap_or_default();
        let ignore_patterns = master("ignore-patterns")
            .map(|value| split_list(value, &[',', '\n']))
            .unwrap_or_default();
        let message_template = doc
            .get(REPORTS_SECTION, "msg-template")
            .filter(|value| !value.is_empty())
            .map(String::from);

        Self {
            ignore_list,
            ignore_patterns,
            message_template,
        }
    }
}

fn split_list(value: &str, separators: &[char]) -> Vec<String> {
    value
        .split(separators)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
