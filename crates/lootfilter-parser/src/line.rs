//! Parsing of a single filter line.

use lootfilter_core::{color::ColorInformation, sound::SoundInformation, text::Range};

use crate::{
    config::ParseConfig,
    error::{Diagnostic, ErrorCode},
    registry::RuleRegistry,
    rules::{RuleCheck, RuleOutcome},
    tokenizer::{Token, Tokenizer},
};

/// Everything a line needs from outside itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineEnv<'e> {
    pub(crate) registry: &'e RuleRegistry,
    pub(crate) config: &'e ParseConfig,
    /// Classes that narrow `BaseType` lookups in the current block.
    pub(crate) block_classes: &'e [String],
}

/// The result of parsing one line.
#[derive(Debug)]
pub(crate) enum LineResult<'a> {
    /// Blank or comment-only.
    Empty { range: Range },
    /// The line does not start with a keyword.
    Unreadable { range: Range, diagnostic: Diagnostic },
    /// A keyword line, known or not.
    Rule(RuleLine<'a>),
}

/// A line that starts with a keyword.
#[derive(Debug)]
pub(crate) struct RuleLine<'a> {
    pub(crate) keyword: Token<&'a str>,
    /// Whether the keyword is in the registry.
    pub(crate) known: bool,
    /// From the first to the last non-whitespace character.
    pub(crate) range: Range,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) color: Option<ColorInformation>,
    pub(crate) sound: Option<SoundInformation>,
    pub(crate) classes: Vec<String>,
    pub(crate) whitelisted_class: bool,
}

/// An unparsed line. [`LineParser::parse`] consumes it, so every line is
/// parsed exactly once.
pub(crate) struct LineParser<'a, 'e> {
    tokens: Tokenizer<'a>,
    env: LineEnv<'e>,
}

impl<'a, 'e> LineParser<'a, 'e> {
    pub(crate) fn new(line: &'a str, row: u32, env: LineEnv<'e>) -> Self {
        Self {
            tokens: Tokenizer::new(line, row),
            env,
        }
    }

    pub(crate) fn parse(mut self) -> LineResult<'a> {
        if self.tokens.is_ignored() {
            let range = Range::on_line(self.tokens.row(), 0, self.tokens.original_length());
            return LineResult::Empty { range };
        }

        let range = self.tokens.text_range();
        let Some(keyword) = self.tokens.next_word() else {
            let diagnostic = Diagnostic::error(
                range,
                "Unreadable keyword, likely due to a stray character.",
            )
            .with_code(ErrorCode::E001);
            return LineResult::Unreadable { range, diagnostic };
        };

        let (known, outcome) = match self.env.registry.get(keyword.value) {
            Some(registration) => {
                let mut check = RuleCheck::new(self.tokens, keyword.value, self.env);
                (registration.validator)(&mut check);
                (true, check.finish(registration.spec.trailing()))
            }
            None => (false, self.unknown(keyword)),
        };

        LineResult::Rule(RuleLine {
            keyword,
            known,
            range,
            diagnostics: outcome.diagnostics,
            color: outcome.color,
            sound: outcome.sound,
            classes: outcome.classes,
            whitelisted_class: outcome.whitelisted_class,
        })
    }

    fn unknown(&self, keyword: Token<&str>) -> RuleOutcome {
        let mut outcome = RuleOutcome::default();
        if !self.env.config.is_whitelisted_rule(keyword.value) {
            outcome.diagnostics.push(
                Diagnostic::error(keyword.range, "Unknown filter keyword.")
                    .with_code(ErrorCode::E002),
            );
        }
        outcome
    }
}
