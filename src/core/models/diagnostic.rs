//! A single static-analysis finding

use serde::{Deserialize, Serialize};

use super::Category;

/// One message reported by the linter for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Message category (convention, warning, ...)
    pub category: Category,
    /// Message ID (e.g., "C0114")
    pub msg_id: String,
    /// Symbolic rule name (e.g., "missing-module-docstring")
    pub symbol: String,
    /// Human-readable message text
    pub message: String,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column (0-indexed)
    pub column: u32,
    /// End line, when the linter reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,
    /// End column, when the linter reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,
    /// Path of the linted file as passed to the linter
    #[serde(default)]
    pub path: String,
    /// Python module name
    #[serde(default)]
    pub module: String,
    /// Enclosing object (function, class), empty at module level
    #[serde(default)]
    pub obj: String,
}

impl Diagnostic {
    /// Create a diagnostic with position and rule information
    #[must_use]
    pub fn new(
        category: Category,
        msg_id: impl Into<String>,
        symbol: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            category,
            msg_id: msg_id.into(),
            symbol: symbol.into(),
            message: message.into(),
            line,
            column,
            end_line: None,
            end_column: None,
            path: String::new(),
            module: String::new(),
            obj: String::new(),
        }
    }

    /// Set the file path and module name
    #[must_use]
    pub fn at(mut self, path: impl Into<String>, module: impl Into<String>) -> Self {
        self.path = path.into();
        self.module = module.into();
        self
    }

    /// One-letter category code
    ///
    /// Taken from the message ID when present, so it always agrees with it.
    #[must_use]
    pub fn code(&self) -> char {
        self.msg_id.chars().next().unwrap_or_else(|| self.category.code())
    }
}
