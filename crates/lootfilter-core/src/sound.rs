//! Alert sound cues extracted from filter rules.

use std::fmt;

use serde::Serialize;

use crate::text::Range;

/// Default volume used by the game client when a sound rule omits one.
pub const DEFAULT_VOLUME: u32 = 100;

/// The container format of a custom alert sound file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundFileType {
    Mp3,
    Wav,
    /// The file name ends in an extension the client cannot play.
    Unknown,
}

impl SoundFileType {
    /// Classify a file path or name by its extension, ignoring case.
    pub fn from_path(path: &str) -> Self {
        let extension = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("mp3") => SoundFileType::Mp3,
            Some("wav") => SoundFileType::Wav,
            _ => SoundFileType::Unknown,
        }
    }
}

impl fmt::Display for SoundFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundFileType::Mp3 => write!(f, "MP3"),
            SoundFileType::Wav => write!(f, "WAV"),
            SoundFileType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A sound cue referenced by a filter line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SoundInformation {
    /// A built-in alert sound, played by identifier.
    Default {
        /// Whether the identifier is one the game ships with. Whitelisted
        /// identifiers are accepted but not known.
        known_identifier: bool,
        identifier: String,
        volume: u32,
        range: Range,
    },
    /// A user-supplied sound file.
    Custom {
        file_type: SoundFileType,
        path: String,
        range: Range,
    },
}

impl SoundInformation {
    /// Returns the range of the rule values the cue was read from.
    pub fn range(&self) -> Range {
        match self {
            SoundInformation::Default { range, .. } | SoundInformation::Custom { range, .. } => {
                *range
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(SoundFileType::from_path("alert.mp3"), SoundFileType::Mp3);
        assert_eq!(SoundFileType::from_path("Sounds/Drop.WAV"), SoundFileType::Wav);
        assert_eq!(SoundFileType::from_path("alert.ogg"), SoundFileType::Unknown);
        assert_eq!(SoundFileType::from_path("alert"), SoundFileType::Unknown);
    }

    #[test]
    fn test_serialize_default_sound() {
        let sound = SoundInformation::Default {
            known_identifier: true,
            identifier: "ShVaal".to_string(),
            volume: 50,
            range: Range::on_line(0, 15, 24),
        };

        let json = serde_json::to_value(&sound).unwrap();
        assert_eq!(json["kind"], "default");
        assert_eq!(json["identifier"], "ShVaal");
        assert_eq!(json["volume"], 50);
    }
}
