use crate::error::ErrorCode;

use super::{RuleCheck, first_occurrence};

const SOCKET_COLORS: &[char] = &['R', 'G', 'B', 'W'];

/// `True` or `False` in any letter case. Only `=` is accepted.
pub(super) fn boolean(check: &mut RuleCheck<'_, '_>) {
    let operator = check.tokens.next_operator();
    check.equals_only(operator);

    if check.tokens.next_boolean().is_some() {
        return;
    }
    if check.tokens.is_ignored() {
        check.missing("value");
    } else {
        check.invalid("True or False");
        check.halt();
    }
}

/// One or more rarity names. Names are case-sensitive; any operator is
/// accepted but only `=` may compare against several names.
pub(super) fn rarity(check: &mut RuleCheck<'_, '_>, values: &[String]) {
    let operator = check.tokens.next_operator();

    let mut seen = Vec::new();
    let mut count = 0;
    while !check.tokens.is_ignored() {
        let Some(token) = check.tokens.next_string() else {
            check.invalid("a rarity");
            check.halt();
            break;
        };
        count += 1;
        if !first_occurrence(&mut seen, token.value) {
            check.duplicate(token);
        }
        if !values.iter().any(|value| value == token.value) {
            let message = format!(
                "Invalid rarity \"{}\" for {}; expected one of {}.",
                token.value,
                check.keyword(),
                values.join(", ")
            );
            check.error(ErrorCode::E105, token.range, message);
        }
    }

    if count == 0 && !check.is_halted() {
        check.missing("rarity");
    }
    check.single_value_operator(operator, count);
}

/// A group of one to six socket colors, such as `RRG`. Only `=` is accepted.
pub(super) fn socket_group(check: &mut RuleCheck<'_, '_>) {
    let operator = check.tokens.next_operator();
    check.equals_only(operator);

    let Some(token) = check.tokens.next_string() else {
        check.missing("socket group");
        return;
    };

    let length = token.value.chars().count();
    let valid = (1..=6).contains(&length)
        && token
            .value
            .chars()
            .all(|socket| SOCKET_COLORS.contains(&socket.to_ascii_uppercase()));
    if !valid {
        let message = format!(
            "Invalid socket group \"{}\"; expected 1 to 6 of the letters R, G, B and W.",
            token.value
        );
        check.error(ErrorCode::E105, token.range, message);
    }
}
