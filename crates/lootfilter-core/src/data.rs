//! Read-only reference data consulted by the filter validator.
//!
//! Reference data is four JSON tables:
//!
//! - `rules.json` - every recognized keyword with its rule kind, bounds,
//!   enumerations, per-block limit and trailing-text policy ([`RuleTable`])
//! - `items.json` - item classes and their base types ([`ItemCatalog`])
//! - `mods.json` - explicit mod names ([`ModCatalog`])
//! - `sounds.json` - built-in alert sound identifiers ([`SoundCatalog`])
//!
//! A copy of each table is bundled into the crate; [`ReferenceData::from_dir`]
//! loads a replacement set from disk. Tables are checked for internal
//! consistency when loaded, so a parse never discovers broken data halfway
//! through a document.
//!
//! # Example
//!
//! ```
//! # use lootfilter_core::data::ReferenceData;
//! let data = ReferenceData::bundled().expect("bundled data is consistent");
//! assert!(data.rules().get("ItemLevel").is_some());
//! ```

mod error;
mod items;
mod mods;
mod rules;
mod sounds;

pub use error::DataError;
pub use items::{BaseIndex, BaseScope, CLASS_NARROWING_LIMIT, ItemCatalog, ItemClass};
pub use mods::ModCatalog;
pub use rules::{RuleKind, RuleSpec, RuleTable, TrailingText};
pub use sounds::{NumericRange, SoundCatalog};

use std::{fs, path::Path};

use log::{debug, info};
use serde::de::DeserializeOwned;

const RULES_FILE: &str = "rules.json";
const ITEMS_FILE: &str = "items.json";
const MODS_FILE: &str = "mods.json";
const SOUNDS_FILE: &str = "sounds.json";

const BUNDLED_RULES: &str = include_str!("../data/rules.json");
const BUNDLED_ITEMS: &str = include_str!("../data/items.json");
const BUNDLED_MODS: &str = include_str!("../data/mods.json");
const BUNDLED_SOUNDS: &str = include_str!("../data/sounds.json");

/// The complete set of reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    rules: RuleTable,
    items: ItemCatalog,
    mods: ModCatalog,
    sounds: SoundCatalog,
}

impl ReferenceData {
    /// Load the tables bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if a bundled table fails to parse or is
    /// inconsistent. Either indicates a packaging bug.
    pub fn bundled() -> Result<Self, DataError> {
        debug!("Loading bundled reference data");
        Self::from_json(BUNDLED_RULES, BUNDLED_ITEMS, BUNDLED_MODS, BUNDLED_SOUNDS)
    }

    /// Load the four tables from a directory.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if a file is missing, unreadable, malformed or
    /// inconsistent.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        info!(path = dir.display().to_string(); "Loading reference data from directory");

        let read = |file: &str| {
            let path = dir.join(file);
            fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
        };

        Self::from_json(
            &read(RULES_FILE)?,
            &read(ITEMS_FILE)?,
            &read(MODS_FILE)?,
            &read(SOUNDS_FILE)?,
        )
    }

    /// Parse and validate the four tables from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Json`] naming the offending table on a syntax or
    /// shape error, and [`DataError::Integrity`] when a table is
    /// inconsistent.
    pub fn from_json(rules: &str, items: &str, mods: &str, sounds: &str) -> Result<Self, DataError> {
        let rules: RuleTable = parse_table(RULES_FILE, rules)?;
        let items: items::ItemsFile = parse_table(ITEMS_FILE, items)?;
        let mods: ModCatalog = parse_table(MODS_FILE, mods)?;
        let sounds: SoundCatalog = parse_table(SOUNDS_FILE, sounds)?;

        rules.validate()?;
        sounds.validate()?;
        let items = ItemCatalog::new(items.classes);

        debug!(
            rules = rules.len(),
            classes = items.classes().len(),
            bases = items.index().len(),
            mods = mods.len();
            "Reference data loaded"
        );

        Ok(Self {
            rules,
            items,
            mods,
            sounds,
        })
    }

    /// Replace the rule table, keeping the catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Integrity`] if `rules` is inconsistent.
    pub fn with_rules(mut self, rules: RuleTable) -> Result<Self, DataError> {
        rules.validate()?;
        self.rules = rules;
        Ok(self)
    }

    /// Returns the rule metadata table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Returns the item class and base type catalog.
    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    /// Returns the explicit mod catalog.
    pub fn mods(&self) -> &ModCatalog {
        &self.mods
    }

    /// Returns the alert sound catalog.
    pub fn sounds(&self) -> &SoundCatalog {
        &self.sounds
    }
}

fn parse_table<T: DeserializeOwned>(file: &'static str, text: &str) -> Result<T, DataError> {
    serde_json::from_str(text).map_err(|source| DataError::Json { file, source })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_bundled_data_loads() {
        let data = ReferenceData::bundled().expect("bundled data should load");

        assert!(data.rules().get("Show").is_some());
        assert!(data.rules().get("BaseType").is_some());
        assert!(!data.items().classes().is_empty());
        assert!(data.sounds().is_known_name("ShVaal"));
    }

    #[test]
    fn test_from_dir_round_trips_bundled_tables() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(RULES_FILE), BUNDLED_RULES).unwrap();
        fs::write(dir.path().join(ITEMS_FILE), BUNDLED_ITEMS).unwrap();
        fs::write(dir.path().join(MODS_FILE), BUNDLED_MODS).unwrap();
        fs::write(dir.path().join(SOUNDS_FILE), BUNDLED_SOUNDS).unwrap();

        let data = ReferenceData::from_dir(dir.path()).expect("directory data should load");
        assert_eq!(
            data.rules().len(),
            ReferenceData::bundled().unwrap().rules().len()
        );
    }

    #[test]
    fn test_with_rules_validates_table() {
        let data = ReferenceData::bundled().unwrap();
        let rules: RuleTable = [(
            "ItemLevel".to_string(),
            RuleSpec::new(RuleKind::Boolean, 1, TrailingText::Reject),
        )]
        .into_iter()
        .collect();

        let err = data.with_rules(rules).unwrap_err();
        assert!(matches!(err, DataError::Integrity { .. }));
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = ReferenceData::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_malformed_table_names_file() {
        let err = ReferenceData::from_json("{", BUNDLED_ITEMS, BUNDLED_MODS, BUNDLED_SOUNDS)
            .unwrap_err();

        match err {
            DataError::Json { file, .. } => assert_eq!(file, RULES_FILE),
            other => panic!("Expected Json error, got {other:?}"),
        }
    }
}
