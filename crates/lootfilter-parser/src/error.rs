//! Diagnostics reported while validating a filter.
//!
//! Validation never fails as a whole: every problem found in a line becomes a
//! [`Diagnostic`] and parsing moves on. The pieces are:
//!
//! - [`Severity`] - how the game client treats the problem
//! - [`ErrorCode`] - a stable code grouped by the kind of problem
//! - [`Diagnostic`] - one message attached to a range of filter text
//!
//! # Example
//!
//! ```
//! # use lootfilter_parser::error::{Diagnostic, ErrorCode};
//! # use lootfilter_core::text::Range;
//!
//! let diag = Diagnostic::error(Range::on_line(3, 12, 15), "Value 900 is out of range")
//!     .with_code(ErrorCode::E102)
//!     .with_help("use a value between 0 and 100");
//! assert!(diag.severity().is_error());
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use severity::Severity;
