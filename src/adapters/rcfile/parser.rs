//! INI reader for pylint rcfiles
//!
//! Follows the subset of Python `configparser` behavior pylint rcfiles rely
//! on:
//!
//! - `[section]` headers, section names case-sensitive
//! - `key = value` or `key: value`, keys lower-cased
//! - whole-line `#` and `;` comments
//! - indented lines continue the previous value, joined with `\n`; blank
//!   lines inside a continued value are kept, trailing ones dropped

use std::collections::BTreeMap;

use thiserror::Error;

/// Syntax errors in an INI document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// An option appeared before any section header
    #[error("line {line}: option outside of any section: {content}")]
    MissingSection {
        /// 1-based line number
        line: usize,
        /// Offending line
        content: String,
    },

    /// A line is neither a header, an option nor a continuation
    #[error("line {line}: cannot parse: {content}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// Offending line
        content: String,
    },
}

/// Parsed INI document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl IniDocument {
    /// Parse INI text
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] for options before the first section and
    /// for lines without a `=`/`:` delimiter.
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        let mut doc = Self::default();
        let mut section: Option<String> = None;
        // Option that indented lines continue
        let mut current: Option<String> = None;
        // Blank lines seen since the last value line
        let mut blanks = 0;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                blanks += 1;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let continuation = if raw.starts_with([' ', '\t']) {
                section.as_ref().zip(current.as_ref())
            } else {
                None
            };
            if let Some((name, key)) = continuation {
                if let Some(value) = doc.sections.get_mut(name).and_then(|s| s.get_mut(key)) {
                    if !value.is_empty() {
                        value.push_str(&"\n".repeat(blanks + 1));
                    }
                    value.push_str(trimmed);
                }
                blanks = 0;
                continue;
            }
            blanks = 0;

            if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                let name = name.trim().to_string();
                doc.sections.entry(name.clone()).or_default();
                section = Some(name);
                current = None;
                continue;
            }

            let Some(name) = &section else {
                return Err(SyntaxError::MissingSection {
                    line,
                    content: trimmed.to_string(),
                });
            };

            let Some(split) = trimmed.find(['=', ':']) else {
                return Err(SyntaxError::Malformed {
                    line,
                    content: trimmed.to_string(),
                });
            };

            let key = trimmed[..split].trim().to_lowercase();
            let value = trimmed[split + 1..].trim().to_string();
            doc.sections.entry(name.clone()).or_default().insert(key.clone(), value);
            current = Some(key);
        }

        Ok(doc)
    }

    /// Look up a value; `key` is matched case-insensitively
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Whether a section header was present
    #[must_use]
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }
}
