//! Source positions for filter text.
//!
//! Positions use the editor convention: zero-based line and zero-based
//! character offset, where a character is one Unicode scalar value. A
//! [`Range`] never spans lines because the filter language is strictly
//! line-oriented.

use std::fmt;

use serde::Serialize;

/// A zero-based line/character location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    line: u32,
    character: u32,
}

impl Position {
    /// Create a position from a line and character offset.
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Get the zero-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Get the zero-based character offset within the line.
    pub fn character(&self) -> u32 {
        self.character
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Human-facing output is one-based
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// A half-open character range on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Range {
    start: Position,
    end: Position,
}

impl Range {
    /// Create a range from two positions.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a range covering `start..end` on `line`.
    pub fn on_line(line: u32, start: u32, end: u32) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    /// Create an empty range at a single position.
    pub fn point(line: u32, character: u32) -> Self {
        Self::on_line(line, character, character)
    }

    /// Get the start position.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Get the end position (exclusive).
    pub fn end(&self) -> Position {
        self.end
    }

    /// Get the line the range starts on.
    pub fn line(&self) -> u32 {
        self.start.line
    }

    /// Get the number of characters covered, for single-line ranges.
    pub fn len(&self) -> u32 {
        self.end.character.saturating_sub(self.start.character)
    }

    /// Check if the range is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether `position` falls inside this range.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }

    /// Create a union of two ranges (encompassing both)
    pub fn union(&self, other: Range) -> Range {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_basic_functionality() {
        let range = Range::on_line(3, 5, 10);
        assert_eq!(range.line(), 3);
        assert_eq!(range.start().character(), 5);
        assert_eq!(range.end().character(), 10);
        assert_eq!(range.len(), 5);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_range_point_is_empty() {
        let range = Range::point(0, 7);
        assert_eq!(range.len(), 0);
        assert!(range.is_empty());
    }

    #[test]
    fn test_range_union() {
        let first = Range::on_line(1, 5, 10);
        let second = Range::on_line(1, 15, 20);
        let union = first.union(second);
        assert_eq!(union, Range::on_line(1, 5, 20));
    }

    #[test]
    fn test_range_contains_is_end_exclusive() {
        let range = Range::on_line(2, 4, 8);
        assert!(range.contains(Position::new(2, 4)));
        assert!(range.contains(Position::new(2, 7)));
        assert!(!range.contains(Position::new(2, 8)));
        assert!(!range.contains(Position::new(1, 5)));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Range::on_line(0, 0, 4).to_string(), "1:1-1:5");
    }
}
