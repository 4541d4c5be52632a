use std::path::Path;

use log::debug;

use lootfilter_core::{
    sound::{DEFAULT_VOLUME, SoundFileType, SoundInformation},
    text::Range,
};

use crate::error::{Diagnostic, ErrorCode};

use super::RuleCheck;

/// A built-in sound, by name or number, and an optional volume.
///
/// Whitelisted identifiers are accepted but not marked as known. A bad
/// volume is reported and the default volume is used instead.
pub(super) fn alert_sound(check: &mut RuleCheck<'_, '_>) {
    let Some(identifier) = check.tokens.next_word() else {
        if check.tokens.is_ignored() {
            check.missing("sound identifier");
        } else {
            check.invalid("a sound identifier");
            check.halt();
        }
        return;
    };

    let sounds = check.data().sounds();
    let known_identifier = if identifier.value.chars().all(|c| c.is_ascii_digit()) {
        let number = identifier.value.parse::<i64>().ok();
        if number.is_some_and(|number| sounds.is_known_number(number)) {
            Some(true)
        } else {
            let numeric = sounds.numeric();
            let message = format!(
                "Value {} is out of range for {}; expected a value between {} and {}.",
                identifier.value,
                check.keyword(),
                numeric.min,
                numeric.max
            );
            check.error(ErrorCode::E102, identifier.range, message);
            None
        }
    } else if sounds.is_known_name(identifier.value) {
        Some(true)
    } else if check.config().is_whitelisted_sound(identifier.value) {
        Some(false)
    } else {
        let message = format!("Unknown alert sound \"{}\".", identifier.value);
        check.error(ErrorCode::E109, identifier.range, message);
        None
    };

    let mut range = identifier.range;
    let mut volume = DEFAULT_VOLUME;
    if !check.tokens.is_ignored() {
        match check.tokens.next_number() {
            Some(token) => {
                let limits = sounds.volume();
                if check.expect_within(token, limits.min, limits.max) {
                    volume = u32::try_from(token.value).unwrap_or(DEFAULT_VOLUME);
                }
                range = range.union(token.range);
            }
            None => range = range.union(check.invalid("a volume")),
        }
    }

    if let Some(known_identifier) = known_identifier {
        check.set_sound(SoundInformation::Default {
            known_identifier,
            identifier: identifier.value.to_string(),
            volume,
            range,
        });
    }
}

/// A custom `.mp3` or `.wav` file, optionally checked for existence.
pub(super) fn custom_sound(check: &mut RuleCheck<'_, '_>) {
    let Some(path) = check.tokens.next_string() else {
        check.missing("sound file");
        return;
    };
    if path.value.is_empty() {
        let message = format!("Empty values are not allowed in the {} rule.", check.keyword());
        check.error(ErrorCode::E111, path.range, message);
        return;
    }

    let file_type = SoundFileType::from_path(path.value);
    if file_type == SoundFileType::Unknown {
        let message = format!(
            "Unsupported sound file type for \"{}\"; expected an .mp3 or .wav file.",
            path.value
        );
        check.error(ErrorCode::E110, path.range, message);
    } else if check.config().verify_custom_sounds() {
        verify_sound_file(check, path.value, path.range);
    }

    check.set_sound(SoundInformation::Custom {
        file_type,
        path: path.value.to_string(),
        range: path.range,
    });
}

/// Warn when the sound file does not exist. Relative paths are resolved
/// against the configured sound folder and skipped without one.
fn verify_sound_file(check: &mut RuleCheck<'_, '_>, value: &str, range: Range) {
    let file = Path::new(value);
    let resolved = if file.is_absolute() {
        file.to_path_buf()
    } else if let Some(folder) = check.config().sound_folder() {
        folder.join(file)
    } else {
        return;
    };

    debug!(path = resolved.display().to_string(); "Checking custom sound file");
    if !resolved.exists() {
        let diagnostic = Diagnostic::warning(
            range,
            format!("Custom sound file \"{value}\" was not found."),
        )
        .with_code(ErrorCode::E203)
        .with_help(format!("looked for {}", resolved.display()));
        check.emit(diagnostic);
    }
}
