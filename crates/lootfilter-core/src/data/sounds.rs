use serde::Deserialize;

use crate::{data::DataError, sound::DEFAULT_VOLUME};

/// An inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

impl NumericRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Built-in alert sounds.
///
/// A sound is named either by identifier (`ShVaal`) or by a number within
/// `numeric`.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundCatalog {
    identifiers: Vec<String>,
    numeric: NumericRange,
    volume: NumericRange,
}

impl SoundCatalog {
    pub fn new(identifiers: Vec<String>, numeric: NumericRange, volume: NumericRange) -> Self {
        Self {
            identifiers,
            numeric,
            volume,
        }
    }

    /// Returns `true` for a built-in sound name. Names are case-sensitive.
    pub fn is_known_name(&self, name: &str) -> bool {
        self.identifiers.iter().any(|identifier| identifier == name)
    }

    /// Returns `true` for a built-in sound number.
    pub fn is_known_number(&self, number: i64) -> bool {
        self.numeric.contains(number)
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn numeric(&self) -> NumericRange {
        self.numeric
    }

    pub fn volume(&self) -> NumericRange {
        self.volume
    }

    /// Check that the ranges are ordered and admit the default volume.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Integrity`] describing the first problem found.
    pub fn validate(&self) -> Result<(), DataError> {
        for (subject, range) in [("sound numbers", self.numeric), ("sound volume", self.volume)] {
            if range.min > range.max {
                return Err(DataError::integrity(
                    subject,
                    format!("minimum {} exceeds maximum {}", range.min, range.max),
                ));
            }
        }

        if !self.volume.contains(i64::from(DEFAULT_VOLUME)) {
            return Err(DataError::integrity(
                "sound volume",
                format!("default volume {DEFAULT_VOLUME} is outside the allowed range"),
            ));
        }

        Ok(())
    }
}
