//! Color handling for filter styling rules
//!
//! This module provides the [`Color`] type which wraps the `AlphaColor` type
//! from the color crate. Filter rules spell colors as 8-bit channels; editors
//! want normalized components, so the wrapper stores the normalized form and
//! can hand back the 8-bit one.

use std::fmt;

use color::{AlphaColor, DynamicColor, Srgb};
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::text::Range;

/// An sRGB color with every component in `0.0..=1.0`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: AlphaColor<Srgb>,
}

impl Color {
    /// Create a color from 8-bit channels.
    ///
    /// Each channel is divided by 255.
    ///
    /// # Examples
    ///
    /// ```
    /// use lootfilter_core::color::Color;
    ///
    /// let red = Color::from_rgba8(255, 0, 0, 255);
    /// assert_eq!(red.red(), 1.0);
    /// assert_eq!(red.alpha(), 1.0);
    /// ```
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let components = [red, green, blue, alpha].map(|channel| f32::from(channel) / 255.0);
        Self {
            color: AlphaColor::new(components),
        }
    }

    /// Returns the red component.
    pub fn red(&self) -> f32 {
        self.color.components[0]
    }

    /// Returns the green component.
    pub fn green(&self) -> f32 {
        self.color.components[1]
    }

    /// Returns the blue component.
    pub fn blue(&self) -> f32 {
        self.color.components[2]
    }

    /// Returns the alpha (opacity) component, where 1.0 is fully opaque.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the color as 8-bit `[red, green, blue, alpha]` channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        let rgba = self.color.to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DynamicColor::from_alpha_color(self.color))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Color", 4)?;
        state.serialize_field("red", &self.red())?;
        state.serialize_field("green", &self.green())?;
        state.serialize_field("blue", &self.blue())?;
        state.serialize_field("alpha", &self.alpha())?;
        state.end()
    }
}

/// A color value found in the filter, with the range its values occupy.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct ColorInformation {
    color: Color,
    range: Range,
}

impl ColorInformation {
    /// Create color information for a range of filter text.
    pub fn new(color: Color, range: Range) -> Self {
        Self { color, range }
    }

    /// Returns the extracted color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the range covering the color's values.
    pub fn range(&self) -> Range {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_from_rgba8_normalizes_channels() {
        let color = Color::from_rgba8(255, 0, 51, 255);
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.green(), 0.0);
        assert!(approx_eq!(f32, color.blue(), 0.2, ulps = 2));
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_to_rgba8_round_trips_channels() {
        let color = Color::from_rgba8(12, 200, 99, 128);
        assert_eq!(color.to_rgba8(), [12, 200, 99, 128]);
    }

    #[test]
    fn test_serialize_uses_named_components() {
        let color = Color::from_rgba8(255, 0, 0, 255);
        let json = serde_json::to_value(color).unwrap();
        assert_eq!(json["red"], 1.0);
        assert_eq!(json["green"], 0.0);
        assert_eq!(json["alpha"], 1.0);
    }
}
