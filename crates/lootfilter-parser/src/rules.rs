//! Value validators, one per rule kind.
//!
//! A validator receives a [`RuleCheck`] whose tokenizer sits just after the
//! keyword. It consumes the values it understands and reports problems
//! through the check. Anything it leaves on the line is handled afterwards as
//! trailing text, unless the validator halted on a token it could not read.

mod color;
mod composite;
mod enumerated;
mod lookup;
mod numeric;
mod sound;

use lootfilter_core::{
    color::ColorInformation,
    data::{ReferenceData, RuleKind, TrailingText},
    sound::SoundInformation,
    text::Range,
};

use crate::{
    config::ParseConfig,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Severity},
    line::LineEnv,
    tokenizer::{Operator, Token, Tokenizer},
};

/// A validator bound to the parameters of one rule.
pub(crate) type Validator = Box<dyn Fn(&mut RuleCheck<'_, '_>) + Send + Sync>;

fn validator(f: impl Fn(&mut RuleCheck<'_, '_>) + Send + Sync + 'static) -> Validator {
    Box::new(f)
}

/// Build the validator for a rule kind, capturing its bounds and
/// enumerations.
pub(crate) fn validator_for(kind: &RuleKind) -> Validator {
    match kind.clone() {
        RuleKind::Block | RuleKind::Flag => validator(|_| {}),
        RuleKind::Range { min, max } => validator(move |check| numeric::range(check, min, max)),
        RuleKind::SingleRange { min, max } => {
            validator(move |check| numeric::single_range(check, min, max))
        }
        RuleKind::Boolean => validator(enumerated::boolean),
        RuleKind::Rarity { values } => validator(move |check| enumerated::rarity(check, &values)),
        RuleKind::SocketGroup => validator(enumerated::socket_group),
        RuleKind::Color => validator(color::color),
        RuleKind::Class => validator(lookup::class),
        RuleKind::BaseType => validator(lookup::base_type),
        RuleKind::ExplicitMod => validator(lookup::explicit_mod),
        RuleKind::AlertSound => validator(sound::alert_sound),
        RuleKind::CustomSound => validator(sound::custom_sound),
        RuleKind::MinimapIcon {
            sizes,
            colors,
            shapes,
        } => validator(move |check| composite::minimap_icon(check, &sizes, &colors, &shapes)),
        RuleKind::PlayEffect { colors } => {
            validator(move |check| composite::play_effect(check, &colors))
        }
    }
}

/// What a validator produced for one line.
#[derive(Debug, Default)]
pub(crate) struct RuleOutcome {
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) color: Option<ColorInformation>,
    pub(crate) sound: Option<SoundInformation>,
    /// Class values matched against the catalog.
    pub(crate) classes: Vec<String>,
    /// A class value matched only the whitelist.
    pub(crate) whitelisted_class: bool,
}

/// The state a validator works on.
pub(crate) struct RuleCheck<'a, 'e> {
    pub(crate) tokens: Tokenizer<'a>,
    keyword: &'a str,
    env: LineEnv<'e>,
    diagnostics: DiagnosticCollector,
    outcome: RuleOutcome,
    halted: bool,
}

impl<'a, 'e> RuleCheck<'a, 'e> {
    pub(crate) fn new(tokens: Tokenizer<'a>, keyword: &'a str, env: LineEnv<'e>) -> Self {
        Self {
            tokens,
            keyword,
            env,
            diagnostics: DiagnosticCollector::new(),
            outcome: RuleOutcome::default(),
            halted: false,
        }
    }

    pub(crate) fn keyword(&self) -> &'a str {
        self.keyword
    }

    pub(crate) fn data(&self) -> &'e ReferenceData {
        self.env.registry.data()
    }

    pub(crate) fn config(&self) -> &'e ParseConfig {
        self.env.config
    }

    /// Classes captured by earlier `Class` rules in the block, or nothing
    /// when base type narrowing is disabled for the block.
    pub(crate) fn block_classes(&self) -> &'e [String] {
        self.env.block_classes
    }

    pub(crate) fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.emit(diagnostic);
    }

    pub(crate) fn error(&mut self, code: ErrorCode, range: Range, message: impl Into<String>) {
        self.emit(Diagnostic::error(range, message).with_code(code));
    }

    /// Stop validating the line. Trailing text is not reported.
    pub(crate) fn halt(&mut self) {
        self.halted = true;
    }

    pub(crate) fn is_halted(&self) -> bool {
        self.halted
    }

    /// Report a required value that is absent, at the cursor.
    pub(crate) fn missing(&mut self, what: &str) {
        let message = format!("Missing {what} for the {} rule.", self.keyword);
        self.error(ErrorCode::E100, self.tokens.cursor(), message);
    }

    /// Consume the text at the cursor and report it as the wrong kind of
    /// value. Returns the range consumed.
    pub(crate) fn invalid(&mut self, expected: &str) -> Range {
        let (range, message) = match self.tokens.next_string() {
            Some(token) => (
                token.range,
                format!(
                    "Invalid value \"{}\" for {}; expected {expected}.",
                    token.value, self.keyword
                ),
            ),
            None => (
                self.tokens.remainder(),
                format!("Invalid value for {}; expected {expected}.", self.keyword),
            ),
        };
        self.error(ErrorCode::E101, range, message);
        range
    }

    /// Report `token` unless it lies within `min..=max`. Returns `true` when
    /// the value is in range.
    pub(crate) fn expect_within(&mut self, token: Token<i64>, min: i64, max: i64) -> bool {
        if (min..=max).contains(&token.value) {
            return true;
        }
        let message = format!(
            "Value {} is out of range for {}; expected a value between {min} and {max}.",
            token.value, self.keyword
        );
        self.error(ErrorCode::E102, token.range, message);
        false
    }

    /// Report an operator other than `=`.
    pub(crate) fn equals_only(&mut self, operator: Option<Token<Operator>>) {
        if let Some(operator) = operator.filter(|operator| !operator.value.is_equal()) {
            let message = format!(
                "The {} operator is not supported by {}; only = is allowed.",
                operator.value, self.keyword
            );
            self.error(ErrorCode::E103, operator.range, message);
        }
    }

    /// Report a comparison operator followed by more than one value.
    pub(crate) fn single_value_operator(&mut self, operator: Option<Token<Operator>>, count: usize) {
        if count <= 1 {
            return;
        }
        if let Some(operator) = operator.filter(|operator| !operator.value.is_equal()) {
            let message = format!(
                "The {} operator can only be used with a single value.",
                operator.value
            );
            self.error(ErrorCode::E104, operator.range, message);
        }
    }

    /// Flag a value repeated within the rule.
    pub(crate) fn duplicate(&mut self, token: Token<&str>) {
        let message = format!(
            "Duplicate value \"{}\" within the {} rule.",
            token.value, self.keyword
        );
        self.emit(Diagnostic::hint(token.range, message).with_code(ErrorCode::E200));
    }

    pub(crate) fn set_color(&mut self, color: ColorInformation) {
        self.outcome.color = Some(color);
    }

    pub(crate) fn set_sound(&mut self, sound: SoundInformation) {
        self.outcome.sound = Some(sound);
    }

    pub(crate) fn capture_class(&mut self, class: &str) {
        self.outcome.classes.push(class.to_string());
    }

    pub(crate) fn mark_whitelisted_class(&mut self) {
        self.outcome.whitelisted_class = true;
    }

    /// Report leftover text according to `trailing` and return the outcome.
    pub(crate) fn finish(mut self, trailing: TrailingText) -> RuleOutcome {
        if !self.halted && !self.tokens.is_ignored() {
            let severity = match trailing {
                TrailingText::Reject => Severity::Error,
                TrailingText::Warn => Severity::Warning,
                TrailingText::Ignore => Severity::Hint,
            };
            let range = self.tokens.remainder();
            let message = format!("Unexpected trailing text after the {} rule.", self.keyword);
            self.emit(Diagnostic::new(severity, range, message).with_code(ErrorCode::E202));
        }

        let mut outcome = self.outcome;
        outcome.diagnostics = self.diagnostics.finish();
        outcome
    }
}

/// Returns `true` the first time `value` is offered, remembering it.
fn first_occurrence<'a>(seen: &mut Vec<&'a str>, value: &'a str) -> bool {
    if seen.contains(&value) {
        false
    } else {
        seen.push(value);
        true
    }
}
