use lootfilter_core::data::BaseScope;

use crate::{error::ErrorCode, tokenizer::Token};

use super::{RuleCheck, first_occurrence};

/// Read every string value of a lookup rule and hand the non-empty ones to
/// `visit`. Repeated values are flagged but still visited.
fn each_value<'a, 'e>(
    check: &mut RuleCheck<'a, 'e>,
    mut visit: impl FnMut(&mut RuleCheck<'a, 'e>, Token<&'a str>),
) {
    let operator = check.tokens.next_operator();
    check.equals_only(operator);

    let mut seen = Vec::new();
    let mut count = 0;
    while !check.tokens.is_ignored() {
        let Some(token) = check.tokens.next_string() else {
            check.invalid("a string");
            check.halt();
            break;
        };
        count += 1;

        if token.value.is_empty() {
            let message = format!("Empty values are not allowed in the {} rule.", check.keyword());
            check.error(ErrorCode::E111, token.range, message);
            continue;
        }
        if !first_occurrence(&mut seen, token.value) {
            check.duplicate(token);
        }
        visit(check, token);
    }

    if count == 0 && !check.is_halted() {
        check.missing("value");
    }
}

/// Item class names. Values found in the catalog are captured for later
/// `BaseType` rules in the block.
pub(super) fn class(check: &mut RuleCheck<'_, '_>) {
    let items = check.data().items();
    each_value(check, |check, token| {
        if items.class_matches(token.value) {
            check.capture_class(token.value);
        } else if check.config().is_whitelisted_class(token.value) {
            check.mark_whitelisted_class();
        } else {
            let message = format!("No item class matches \"{}\".", token.value);
            check.error(ErrorCode::E106, token.range, message);
        }
    });
}

/// Base type names, searched within the classes captured by the block when
/// that narrows the search.
pub(super) fn base_type(check: &mut RuleCheck<'_, '_>) {
    let scope: BaseScope<'_> = check.data().items().base_scope(check.block_classes());
    each_value(check, |check, token| {
        if !scope.contains(token.value) && !check.config().is_whitelisted_base(token.value) {
            let message = format!("No base type matches \"{}\".", token.value);
            check.error(ErrorCode::E107, token.range, message);
        }
    });
}

/// Explicit mod names from the prefix and suffix lists, or only the limited
/// pool when it is enabled.
pub(super) fn explicit_mod(check: &mut RuleCheck<'_, '_>) {
    let mods = check.data().mods();
    let limited = check.config().limited_mod_pool();
    each_value(check, |check, token| {
        if !mods.matches(token.value, limited) && !check.config().is_whitelisted_mod(token.value) {
            let message = format!("No explicit mod matches \"{}\".", token.value);
            check.error(ErrorCode::E108, token.range, message);
        }
    });
}
