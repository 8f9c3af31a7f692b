//! Configuration errors
//!
//! Every failure carries structured data (kind, offending entry, field) and
//! renders to the message shown to the user.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a JSON array of job objects
    #[error("Error in configuration file: object / array / Date badly formatted: \n\n\t\t{fragment}")]
    Syntax {
        fragment: String,
        line: usize,
        column: usize,
    },

    /// One or more entries broke a field rule. Never empty.
    #[error("Error in configuration file: {}", render_violations(.0))]
    Invalid(Vec<Violation>),
}

/// Failure class of a [`ConfigError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Syntax,
    Validation,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Io(_) => ErrorKind::Io,
            ConfigError::Syntax { .. } => ErrorKind::Syntax,
            ConfigError::Invalid(_) => ErrorKind::Validation,
        }
    }

    /// Field violations, empty unless this is a validation error
    pub fn violations(&self) -> &[Violation] {
        match self {
            ConfigError::Invalid(violations) => violations,
            _ => &[],
        }
    }

    /// Build a syntax error, quoting the source around where the decoder stopped
    pub(crate) fn syntax(input: &[u8], err: &serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();

        let source = String::from_utf8_lossy(input);
        let snippet = line
            .checked_sub(1)
            .and_then(|idx| source.lines().nth(idx))
            .map(|text| clip_around(text, column))
            .unwrap_or_default();

        let fragment = if snippet.is_empty() {
            err.to_string()
        } else {
            format!("{} ({})", snippet, err)
        };

        ConfigError::Syntax { fragment, line, column }
    }
}

/// Characters kept on each side of the error column
const SNIPPET_RADIUS: usize = 40;

/// Trimmed window of `text` around the 1-based `column`, marked with `...` where cut
fn clip_around(text: &str, column: usize) -> String {
    let len = text.chars().count();
    let at = column.saturating_sub(1).min(len);
    let start = at.saturating_sub(SNIPPET_RADIUS);
    let end = at.saturating_add(SNIPPET_RADIUS).min(len);

    let window: String = text.chars().skip(start).take(end - start).collect();
    let window = window.trim();
    if window.is_empty() {
        return String::new();
    }

    format!(
        "{}{}{}",
        if start > 0 { "..." } else { "" },
        window,
        if end < len { "..." } else { "" }
    )
}

/// A single field rule broken by one entry of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `collection` is empty, or `database` is empty and required.
    /// `missing` names the empty fields.
    EmptyName {
        index: usize,
        missing: Vec<&'static str>,
    },

    /// `count` is zero or negative
    NonPositiveCount {
        index: usize,
        collection: String,
        count: i64,
    },
}

impl Violation {
    /// Position of the offending entry in the input array
    pub fn index(&self) -> usize {
        match self {
            Violation::EmptyName { index, .. } | Violation::NonPositiveCount { index, .. } => *index,
        }
    }

    /// Name of the field the rule applies to
    pub fn field(&self) -> &'static str {
        match self {
            Violation::EmptyName { .. } => "collection/database",
            Violation::NonPositiveCount { .. } => "count",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyName { index, missing } => {
                write!(
                    f,
                    "'collection' and 'database' fields can't be empty (entry {}: missing {})",
                    index,
                    missing.iter().map(|name| format!("'{}'", name)).collect::<Vec<_>>().join(", ")
                )
            }
            Violation::NonPositiveCount { collection, count, .. } => {
                write!(f, "for collection {}, 'count' has to be > 0 (got {})", collection, count)
            }
        }
    }
}

/// One violation per line, each introduced by `\n\t`, in input order
fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("\n\t{}", v))
        .collect()
}
