//! State carried from one line to the next.

use std::collections::HashMap;

use lootfilter_core::text::Range;

use crate::{
    error::{Diagnostic, ErrorCode},
    line::RuleLine,
    registry::RuleRegistry,
};

/// The rules seen since the last `Show` or `Hide`.
#[derive(Debug, Default)]
pub(crate) struct BlockContext {
    /// Range of the keyword that opened the block.
    root: Option<Range>,
    classes: Vec<String>,
    /// A `Class` value matched only the whitelist, so base types may belong
    /// to classes the catalog does not know.
    unrestricted: bool,
    occurrences: HashMap<String, u32>,
}

impl BlockContext {
    fn open(root: Range) -> Self {
        Self {
            root: Some(root),
            ..Self::default()
        }
    }

    pub(crate) fn root(&self) -> Option<Range> {
        self.root
    }

    /// Classes that narrow `BaseType` lookups; empty when narrowing is off.
    pub(crate) fn base_classes(&self) -> &[String] {
        if self.unrestricted {
            &[]
        } else {
            &self.classes
        }
    }

    fn capture(&mut self, classes: Vec<String>, whitelisted: bool) {
        self.classes.extend(classes);
        self.unrestricted |= whitelisted;
    }

    /// Count one more occurrence of `keyword` and return the new count.
    fn record(&mut self, keyword: &str) -> u32 {
        let count = self.occurrences.entry(keyword.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

/// State for a whole document parse.
#[derive(Debug, Default)]
pub(crate) struct FilterContext {
    /// Set by the first `Show` or `Hide` and never cleared.
    block_found: bool,
    block: BlockContext,
}

impl FilterContext {
    pub(crate) fn block(&self) -> &BlockContext {
        &self.block
    }

    pub(crate) fn block_found(&self) -> bool {
        self.block_found
    }

    /// Apply the cross-line checks for a parsed keyword line and fold it into
    /// the context. Diagnostics are appended to the line.
    ///
    /// # Panics
    ///
    /// Panics if a known keyword has no registry entry. Lines are parsed
    /// against the same registry, so this indicates a programming error.
    pub(crate) fn apply(&mut self, line: &mut RuleLine<'_>, registry: &RuleRegistry) {
        if !line.known {
            return;
        }

        let keyword = line.keyword.value;
        let spec = registry
            .spec(keyword)
            .expect("keyword dispatched without a registry entry");

        if spec.opens_block() {
            self.block = BlockContext::open(line.keyword.range);
            self.block_found = true;
            return;
        }

        if !self.block_found {
            line.diagnostics.push(
                Diagnostic::error(
                    line.range,
                    format!("Block rule {keyword} found outside of a Hide or Show block."),
                )
                .with_code(ErrorCode::E003),
            );
            return;
        }

        let count = self.block.record(keyword);
        let limit = spec.limit();
        if count > limit {
            let message = format!(
                "{} occurrence of the {keyword} rule within a block with a limit of {limit}.",
                ordinal(count)
            );
            line.diagnostics.push(
                Diagnostic::warning(line.keyword.range, message).with_code(ErrorCode::E201),
            );
        }

        if !line.classes.is_empty() || line.whitelisted_class {
            self.block
                .capture(std::mem::take(&mut line.classes), line.whitelisted_class);
        }
    }
}

/// English ordinal for a count: `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`.
pub(crate) fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
