//! Rule metadata: which keywords exist and how their values are checked.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::data::DataError;

/// How the game client reacts to text left over after a rule's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingText {
    /// The client refuses to load the filter.
    #[default]
    Reject,
    /// The client loads the filter but the text is likely a mistake.
    Warn,
    /// The client silently ignores the text.
    Ignore,
}

/// The value grammar of a rule family.
///
/// Each variant selects one validation routine in the parser. Variants with
/// fields carry the bounds and enumerations that routine checks against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Opens a new block (`Show`, `Hide`).
    Block,
    /// One or more integers; a comparison operator allows only one.
    Range { min: i64, max: i64 },
    /// Exactly one integer with an optional `=`.
    SingleRange { min: i64, max: i64 },
    /// `True` or `False`.
    Boolean,
    /// One or more rarity names, ordered from lowest to highest.
    Rarity { values: Vec<String> },
    /// A socket color string such as `RGB`.
    SocketGroup,
    /// Three or four 8-bit color channels.
    Color,
    /// Item class names matched against the item catalog.
    Class,
    /// Base type names matched against the item catalog.
    BaseType,
    /// Explicit mod names matched against the mod catalog.
    ExplicitMod,
    /// A built-in sound identifier and an optional volume.
    AlertSound,
    /// A path to a custom sound file.
    CustomSound,
    /// Positional size, color and shape of a minimap icon.
    MinimapIcon {
        sizes: Vec<i64>,
        colors: Vec<String>,
        shapes: Vec<String>,
    },
    /// A beam color with an optional `Temp` modifier.
    PlayEffect { colors: Vec<String> },
    /// A rule that takes no values.
    Flag,
}

/// Metadata for a single keyword.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleSpec {
    #[serde(flatten)]
    kind: RuleKind,
    /// Occurrences allowed within one block before a warning.
    limit: u32,
    #[serde(default)]
    trailing: TrailingText,
}

impl RuleSpec {
    /// Create rule metadata.
    pub fn new(kind: RuleKind, limit: u32, trailing: TrailingText) -> Self {
        Self {
            kind,
            limit,
            trailing,
        }
    }

    /// Returns the rule kind.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Returns the per-block occurrence limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the trailing-text policy.
    pub fn trailing(&self) -> TrailingText {
        self.trailing
    }

    /// Returns `true` for rules that open a block.
    pub fn opens_block(&self) -> bool {
        matches!(self.kind, RuleKind::Block)
    }

    fn validate(&self, keyword: &str) -> Result<(), DataError> {
        if self.limit == 0 {
            return Err(DataError::integrity(keyword, "block limit must be at least 1"));
        }

        match &self.kind {
            RuleKind::Range { min, max } | RuleKind::SingleRange { min, max } if min > max => {
                Err(DataError::integrity(
                    keyword,
                    format!("minimum {min} exceeds maximum {max}"),
                ))
            }
            RuleKind::Rarity { values } => require_values(keyword, "rarity values", values),
            RuleKind::MinimapIcon {
                sizes,
                colors,
                shapes,
            } => {
                require_values(keyword, "icon sizes", sizes)?;
                require_values(keyword, "icon colors", colors)?;
                require_values(keyword, "icon shapes", shapes)
            }
            RuleKind::PlayEffect { colors } => require_values(keyword, "effect colors", colors),
            _ => Ok(()),
        }
    }
}

fn require_values<T>(keyword: &str, what: &str, values: &[T]) -> Result<(), DataError> {
    if values.is_empty() {
        Err(DataError::integrity(keyword, format!("{what} must not be empty")))
    } else {
        Ok(())
    }
}

/// Keyword to rule metadata, in the order the table was written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: IndexMap<String, RuleSpec>,
}

impl RuleTable {
    /// Look up a keyword. Keywords are case-sensitive.
    pub fn get(&self, keyword: &str) -> Option<&RuleSpec> {
        self.rules.get(keyword)
    }

    /// Iterate over every keyword and its metadata.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSpec)> {
        self.rules.iter().map(|(keyword, spec)| (keyword.as_str(), spec))
    }

    /// Returns the number of keywords.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the table has no keywords.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check every entry, and that at least one keyword opens a block.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Integrity`] for the first inconsistent entry.
    pub fn validate(&self) -> Result<(), DataError> {
        for (keyword, spec) in &self.rules {
            spec.validate(keyword)?;
        }

        if !self.rules.values().any(RuleSpec::opens_block) {
            return Err(DataError::integrity(
                "rules",
                "no keyword opens a block",
            ));
        }

        Ok(())
    }
}

impl FromIterator<(String, RuleSpec)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (String, RuleSpec)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flattened_kind() {
        let json = r#"{
            "ItemLevel": { "kind": "range", "min": 0, "max": 100, "limit": 2 },
            "Show": { "kind": "block", "limit": 1, "trailing": "warn" }
        }"#;

        let table: RuleTable = serde_json::from_str(json).unwrap();

        let item_level = table.get("ItemLevel").unwrap();
        assert_eq!(item_level.kind(), &RuleKind::Range { min: 0, max: 100 });
        assert_eq!(item_level.limit(), 2);
        assert_eq!(item_level.trailing(), TrailingText::Reject);

        let show = table.get("Show").unwrap();
        assert!(show.opens_block());
        assert_eq!(show.trailing(), TrailingText::Warn);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_keyword_order_is_preserved() {
        let json = r#"{
            "Show": { "kind": "block", "limit": 1 },
            "Hide": { "kind": "block", "limit": 1 },
            "Class": { "kind": "class", "limit": 1 }
        }"#;

        let table: RuleTable = serde_json::from_str(json).unwrap();
        let keywords: Vec<_> = table.iter().map(|(keyword, _)| keyword).collect();
        assert_eq!(keywords, ["Show", "Hide", "Class"]);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let table: RuleTable = [
            ("Show".to_string(), RuleSpec::new(RuleKind::Block, 1, TrailingText::Warn)),
            (
                "Quality".to_string(),
                RuleSpec::new(RuleKind::Range { min: 20, max: 0 }, 2, TrailingText::Reject),
            ),
        ]
        .into_iter()
        .collect();

        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("Quality"));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let table: RuleTable = [(
            "Show".to_string(),
            RuleSpec::new(RuleKind::Block, 0, TrailingText::Warn),
        )]
        .into_iter()
        .collect();

        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_requires_block_keyword() {
        let table: RuleTable = [(
            "DisableDropSound".to_string(),
            RuleSpec::new(RuleKind::Flag, 1, TrailingText::Warn),
        )]
        .into_iter()
        .collect();

        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("no keyword opens a block"));
    }

    #[test]
    fn test_validate_rejects_empty_enumeration() {
        let table: RuleTable = [
            ("Show".to_string(), RuleSpec::new(RuleKind::Block, 1, TrailingText::Warn)),
            (
                "PlayEffect".to_string(),
                RuleSpec::new(
                    RuleKind::PlayEffect { colors: Vec::new() },
                    1,
                    TrailingText::Reject,
                ),
            ),
        ]
        .into_iter()
        .collect();

        assert!(table.validate().is_err());
    }
}
