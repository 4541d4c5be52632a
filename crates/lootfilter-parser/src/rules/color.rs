use lootfilter_core::{
    color::{Color, ColorInformation},
    text::Range,
};

use super::RuleCheck;

const CHANNELS: [&str; 4] = ["red", "green", "blue", "alpha"];

/// Three or four channels in `0..=255`; alpha defaults to opaque.
///
/// A bad channel is reported and the remaining channels are still read. The
/// color is extracted only when every supplied channel is valid.
pub(super) fn color(check: &mut RuleCheck<'_, '_>) {
    let mut channels = Vec::with_capacity(CHANNELS.len());
    let mut span: Option<Range> = None;

    for (index, channel) in CHANNELS.into_iter().enumerate() {
        if check.tokens.is_ignored() {
            if index < 3 {
                check.missing(&format!("{channel} value"));
            }
            break;
        }

        let (range, value) = match check.tokens.next_number() {
            Some(token) => {
                let value = u8::try_from(token.value).ok();
                if value.is_none() {
                    check.expect_within(token, 0, 255);
                }
                (token.range, value)
            }
            None => (check.invalid(&format!("a {channel} value")), None),
        };

        span = Some(span.map_or(range, |span| span.union(range)));
        channels.push(value);
    }

    if let (Some(range), [Some(red), Some(green), Some(blue), rest @ ..]) =
        (span, channels.as_slice())
    {
        let alpha = match rest {
            [] => Some(u8::MAX),
            [alpha] => *alpha,
            _ => None,
        };
        if let Some(alpha) = alpha {
            let color = Color::from_rgba8(*red, *green, *blue, alpha);
            check.set_color(ColorInformation::new(color, range));
        }
    }
}
