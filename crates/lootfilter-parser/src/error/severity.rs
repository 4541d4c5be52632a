//! Severity levels for diagnostics.
//!
//! Levels follow the editor convention and are chosen by how the game client
//! reacts to the problem.

use std::fmt;

use serde::Serialize;

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The client rejects the filter or ignores the rule.
    Error,

    /// The filter loads but the line is probably a mistake.
    Warning,

    /// Purely informational.
    Information,

    /// A suggestion, such as removing a duplicate value.
    Hint,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Information => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}
