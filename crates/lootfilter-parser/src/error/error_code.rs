//! Error codes for filter diagnostics.
//!
//! Error codes are organized by kind:
//! - `E0xx` - Structural errors (the line itself)
//! - `E1xx` - Value errors (the values of a rule)
//! - `E2xx` - Policy diagnostics (legal but suspicious input)

use std::fmt;

use serde::Serialize;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    // =========================================================================
    // Structural Errors (E0xx)
    // =========================================================================
    /// Unreadable keyword.
    ///
    /// The line does not start with a word, usually because of a stray
    /// character before the keyword.
    E001,

    /// Unknown keyword.
    ///
    /// The leading word is not a rule the game client understands.
    E002,

    /// Rule outside of a block.
    ///
    /// A rule appears before the first `Show` or `Hide` line.
    E003,

    // =========================================================================
    // Value Errors (E1xx)
    // =========================================================================
    /// Missing value.
    ///
    /// The rule ended before a required value.
    E100,

    /// Invalid value.
    ///
    /// A value has the wrong type, such as text where a number is expected.
    E101,

    /// Value out of range.
    E102,

    /// Unsupported operator.
    ///
    /// The rule accepts only the `=` operator.
    E103,

    /// Comparison operator with multiple values.
    ///
    /// Operators other than `=` compare against exactly one value.
    E104,

    /// Not a member of the allowed values.
    ///
    /// Used for rarities, socket groups, icon sizes, colors and shapes.
    E105,

    /// No item class matches.
    E106,

    /// No base type matches.
    E107,

    /// No explicit mod matches.
    E108,

    /// Unknown alert sound.
    E109,

    /// Unsupported custom sound file type.
    ///
    /// Custom sounds must be `.mp3` or `.wav` files.
    E110,

    /// Empty string value.
    E111,

    // =========================================================================
    // Policy Diagnostics (E2xx)
    // =========================================================================
    /// Duplicate value within one rule.
    E200,

    /// Rule repeated beyond its block limit.
    E201,

    /// Trailing text after a rule's values.
    E202,

    /// Custom sound file not found.
    E203,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Structural errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Value errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            ErrorCode::E107 => "E107",
            ErrorCode::E108 => "E108",
            ErrorCode::E109 => "E109",
            ErrorCode::E110 => "E110",
            ErrorCode::E111 => "E111",
            // Policy diagnostics
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Structural errors
            ErrorCode::E001 => "unreadable keyword",
            ErrorCode::E002 => "unknown keyword",
            ErrorCode::E003 => "rule outside of a block",
            // Value errors
            ErrorCode::E100 => "missing value",
            ErrorCode::E101 => "invalid value",
            ErrorCode::E102 => "value out of range",
            ErrorCode::E103 => "unsupported operator",
            ErrorCode::E104 => "operator with multiple values",
            ErrorCode::E105 => "value not allowed",
            ErrorCode::E106 => "unmatched item class",
            ErrorCode::E107 => "unmatched base type",
            ErrorCode::E108 => "unmatched explicit mod",
            ErrorCode::E109 => "unknown alert sound",
            ErrorCode::E110 => "unsupported sound file type",
            ErrorCode::E111 => "empty string",
            // Policy diagnostics
            ErrorCode::E200 => "duplicate value",
            ErrorCode::E201 => "block limit exceeded",
            ErrorCode::E202 => "trailing text",
            ErrorCode::E203 => "custom sound file not found",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
