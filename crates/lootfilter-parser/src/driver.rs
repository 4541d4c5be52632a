//! Whole-document parsing.
//!
//! The driver is a fold over the lines of a document. Each step parses one
//! line against the current [`FilterContext`], applies the block checks and
//! returns the updated context with the line's result.

use log::{debug, trace};
use serde::Serialize;

use lootfilter_core::{color::ColorInformation, sound::SoundInformation};

use crate::{
    config::ParseConfig,
    context::FilterContext,
    error::Diagnostic,
    line::{LineEnv, LineParser, LineResult},
    registry::RuleRegistry,
};

/// Everything found in a filter, in line order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterParseResult {
    diagnostics: Vec<Diagnostic>,
    color_information: Vec<ColorInformation>,
    sound_information: Vec<SoundInformation>,
}

impl FilterParseResult {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn color_information(&self) -> &[ColorInformation] {
        &self.color_information
    }

    pub fn sound_information(&self) -> &[SoundInformation] {
        &self.sound_information
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity().is_error())
    }

    fn absorb(&mut self, line: LineResult<'_>) {
        match line {
            LineResult::Empty { .. } => {}
            LineResult::Unreadable { diagnostic, .. } => self.diagnostics.push(diagnostic),
            LineResult::Rule(rule) => {
                self.diagnostics.extend(rule.diagnostics);
                self.color_information.extend(rule.color);
                self.sound_information.extend(rule.sound);
            }
        }
    }
}

/// Written at the start of filters saved by some Windows editors.
pub(crate) const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Parse a complete filter.
///
/// Lines are split on `\n` with a trailing `\r` removed, so both LF and CRLF
/// documents keep their line numbers. A leading byte-order mark is skipped
/// and does not count towards the first line's columns. Parsing is
/// deterministic and never fails; every problem is reported as a diagnostic.
///
/// # Example
///
/// ```
/// # use lootfilter_parser::{parse, ParseConfig, RuleRegistry};
/// let registry = RuleRegistry::bundled().unwrap();
/// let result = parse("Show\n    ItemLevel >= 50\n", &registry, &ParseConfig::default());
/// assert!(result.diagnostics().is_empty());
/// ```
pub fn parse(text: &str, registry: &RuleRegistry, config: &ParseConfig) -> FilterParseResult {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let (context, result, lines) = text.split('\n').enumerate().fold(
        (FilterContext::default(), FilterParseResult::default(), 0),
        |(context, mut result, _), (row, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let row = u32::try_from(row).unwrap_or(u32::MAX);
            let (context, line) = step(context, line, row, registry, config);
            result.absorb(line);
            (context, result, row.saturating_add(1))
        },
    );

    debug!(
        lines = lines,
        diagnostics = result.diagnostics.len(),
        colors = result.color_information.len(),
        sounds = result.sound_information.len(),
        block_found = context.block_found();
        "Filter parsed"
    );

    result
}

/// Parse one line and fold it into `context`.
pub(crate) fn step<'a>(
    mut context: FilterContext,
    line: &'a str,
    row: u32,
    registry: &RuleRegistry,
    config: &ParseConfig,
) -> (FilterContext, LineResult<'a>) {
    let env = LineEnv {
        registry,
        config,
        block_classes: context.block().base_classes(),
    };
    let mut result = LineParser::new(line, row, env).parse();

    match &mut result {
        LineResult::Empty { range } => trace!(row = row; "Skipped blank line {range}"),
        LineResult::Unreadable { range, .. } => trace!(row = row; "Unreadable line {range}"),
        LineResult::Rule(rule) => {
            context.apply(rule, registry);
            if let Some(root) = context.block().root().filter(|root| *root == rule.keyword.range) {
                trace!(row = row, keyword = rule.keyword.value; "Block opened at {root}");
            }
        }
    }

    (context, result)
}
