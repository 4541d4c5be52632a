use super::RuleCheck;

/// One or more integers within `min..=max`, optionally preceded by an
/// operator. Operators other than `=` take exactly one value.
pub(super) fn range(check: &mut RuleCheck<'_, '_>, min: i64, max: i64) {
    let operator = check.tokens.next_operator();

    let mut count = 0;
    while !check.tokens.is_ignored() {
        let Some(value) = check.tokens.next_number() else {
            check.invalid("a number");
            check.halt();
            break;
        };
        check.expect_within(value, min, max);
        count += 1;
    }

    if count == 0 && !check.is_halted() {
        check.missing("value");
    }
    check.single_value_operator(operator, count);
}

/// Exactly one integer within `min..=max`. Only `=` is accepted.
pub(super) fn single_range(check: &mut RuleCheck<'_, '_>, min: i64, max: i64) {
    let operator = check.tokens.next_operator();
    check.equals_only(operator);

    match check.tokens.next_number() {
        Some(value) => {
            check.expect_within(value, min, max);
        }
        None if check.tokens.is_ignored() => check.missing("value"),
        None => {
            check.invalid("a number");
            check.halt();
        }
    }
}
