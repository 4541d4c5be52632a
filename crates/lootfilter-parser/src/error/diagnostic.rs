//! The core diagnostic type.
//!
//! A [`Diagnostic`] is a single problem attached to a range of one filter
//! line, with an optional error code and help text.

use std::fmt;

use serde::Serialize;

use lootfilter_core::text::Range;

use crate::error::{ErrorCode, Severity};

/// A diagnostic message with its location in the filter.
///
/// # Example
///
/// ```text
/// error[E102]: Value 900 is out of range for ItemLevel; expected a value between 0 and 100.
///   --> filter.filter:2:15
///    |
///  2 |     ItemLevel >= 900
///    |                  ^^^
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
    message: String,
    range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use lootfilter_parser::error::{Diagnostic, ErrorCode};
    /// # use lootfilter_core::text::Range;
    ///
    /// let diag = Diagnostic::error(Range::on_line(0, 0, 3), "Unknown filter keyword.")
    ///     .with_code(ErrorCode::E002);
    /// assert_eq!(diag.to_string(), "error[E002]: Unknown filter keyword.");
    /// ```
    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, range, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, range, message)
    }

    /// Create an informational diagnostic.
    pub fn information(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Information, range, message)
    }

    /// Create a hint diagnostic.
    pub fn hint(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Hint, range, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the range the diagnostic applies to.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Create a new diagnostic with the given severity and message.
    pub fn new(severity: Severity, range: Range, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            range,
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
