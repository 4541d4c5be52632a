//! # Lootfilter Parser
//!
//! Validator for item filter scripts. A filter is read one line at a time:
//!
//! 1. **Tokenize** - a pull-based [`Tokenizer`] scans the line on demand
//! 2. **Dispatch** - the leading keyword selects a validator from the
//!    [`RuleRegistry`]
//! 3. **Validate** - the validator checks the rule's values against the
//!    reference data and reports [`Diagnostic`](error::Diagnostic)s
//! 4. **Fold** - block-level checks (rules outside a block, per-block
//!    repetition limits, class narrowing) carry state to the next line
//!
//! Parsing never aborts. The result holds every diagnostic together with the
//! colors and sounds the filter references.
//!
//! ## Usage
//!
//! ```
//! # use lootfilter_parser::{parse, ParseConfig, RuleRegistry};
//! let registry = RuleRegistry::bundled().expect("bundled data is consistent");
//! let source = "Show\n    ItemLevel >= 50\n    SetTextColor 255 0 0\n";
//!
//! let result = parse(source, &registry, &ParseConfig::default());
//! assert!(!result.has_errors());
//! assert_eq!(result.color_information().len(), 1);
//! ```

mod config;
mod context;
mod driver;
pub mod error;
mod line;
mod registry;
mod rules;
mod tokenizer;

pub use config::ParseConfig;
pub use driver::{FilterParseResult, parse};
pub use registry::RuleRegistry;
pub use tokenizer::{Operator, Token, Tokenizer};
