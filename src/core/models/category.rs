//! Message categories
//!
//! Pylint sorts every message into one of six categories. The category only
//! affects rendering; any message fails its lint unit.

use serde::{Deserialize, Serialize};

/// Pylint message category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Coding standard violation (C)
    #[default]
    Convention,
    /// Bad code smell (R)
    Refactor,
    /// Python-specific problem (W)
    Warning,
    /// Probable bug (E)
    Error,
    /// Pylint could not process the file any further (F)
    Fatal,
    /// Informational message (I)
    Info,
}

impl Category {
    /// One-letter code used as the first character of message IDs
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Convention => 'C',
            Self::Refactor => 'R',
            Self::Warning => 'W',
            Self::Error => 'E',
            Self::Fatal => 'F',
            Self::Info => 'I',
        }
    }

    /// Lowercase name, as used by pylint's JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Convention => "convention",
            Self::Refactor => "refactor",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "convention" | "c" => Ok(Self::Convention),
            "refactor" | "r" => Ok(Self::Refactor),
            "warning" | "w" => Ok(Self::Warning),
            "error" | "e" => Ok(Self::Error),
            "fatal" | "f" => Ok(Self::Fatal),
            "info" | "i" => Ok(Self::Info),
            _ => Err(format!(
                "Invalid category: {s}. Use: convention, refactor, warning, error, fatal, info"
            )),
        }
    }
}
