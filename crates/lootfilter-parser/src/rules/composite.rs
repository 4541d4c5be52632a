use crate::error::ErrorCode;

use super::RuleCheck;

/// Read one word that must be a member of `allowed`.
///
/// Returns `false` when the value is missing, so positional rules stop
/// asking for the values after it.
fn member(check: &mut RuleCheck<'_, '_>, what: &str, allowed: &[String]) -> bool {
    match check.tokens.next_word() {
        Some(token) => {
            if !allowed.iter().any(|value| value == token.value) {
                let message = format!(
                    "Invalid {what} \"{}\"; expected one of {}.",
                    token.value,
                    allowed.join(", ")
                );
                check.error(ErrorCode::E105, token.range, message);
            }
            true
        }
        None if check.tokens.is_ignored() => {
            check.missing(what);
            false
        }
        None => {
            check.invalid(&format!("an {what}"));
            true
        }
    }
}

/// Size, color and shape, all required and in that order.
pub(super) fn minimap_icon(
    check: &mut RuleCheck<'_, '_>,
    sizes: &[i64],
    colors: &[String],
    shapes: &[String],
) {
    match check.tokens.next_number() {
        Some(size) => {
            if !sizes.contains(&size.value) {
                let allowed: Vec<String> = sizes.iter().map(ToString::to_string).collect();
                let message = format!(
                    "Invalid icon size {}; expected one of {}.",
                    size.value,
                    allowed.join(", ")
                );
                check.error(ErrorCode::E105, size.range, message);
            }
        }
        None if check.tokens.is_ignored() => {
            check.missing("icon size");
            return;
        }
        None => {
            check.invalid("an icon size");
        }
    }

    if member(check, "icon color", colors) {
        member(check, "icon shape", shapes);
    }
}

/// A beam color, optionally followed by `Temp`.
pub(super) fn play_effect(check: &mut RuleCheck<'_, '_>, colors: &[String]) {
    if !member(check, "effect color", colors) {
        return;
    }

    let Some(modifier) = check.tokens.next_word() else {
        return;
    };
    if modifier.value != "Temp" {
        let message = format!(
            "Invalid {} modifier \"{}\"; expected Temp.",
            check.keyword(),
            modifier.value
        );
        check.error(ErrorCode::E105, modifier.range, message);
    }
}
