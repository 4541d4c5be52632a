//! Keyword dispatch table.
//!
//! The [`RuleRegistry`] maps every keyword in the rule table to its metadata
//! and a validator bound to that metadata. Adding a keyword is a change to
//! `rules.json`, not to this crate, as long as it reuses an existing rule
//! kind.

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use lootfilter_core::data::{DataError, ReferenceData, RuleKind, RuleSpec};

use crate::rules::{Validator, validator_for};

/// A keyword's metadata and validator.
pub(crate) struct Registration {
    pub(crate) spec: RuleSpec,
    pub(crate) validator: Validator,
}

/// Reference data together with the validators built from its rule table.
///
/// Built once and shared between parses; it is never mutated afterwards.
pub struct RuleRegistry {
    data: ReferenceData,
    rules: IndexMap<String, Registration>,
}

impl RuleRegistry {
    /// Build the registry, checking that every keyword's rule kind has the
    /// catalog it looks values up in.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Integrity`] naming the first keyword whose
    /// catalog is empty.
    pub fn new(data: ReferenceData) -> Result<Self, DataError> {
        let rules = data
            .rules()
            .iter()
            .map(|(keyword, spec)| {
                check_catalog(&data, keyword, spec.kind())?;
                let registration = Registration {
                    spec: spec.clone(),
                    validator: validator_for(spec.kind()),
                };
                Ok((keyword.to_string(), registration))
            })
            .collect::<Result<IndexMap<_, _>, DataError>>()?;

        debug!(keywords = rules.len(); "Rule registry built");

        Ok(Self { data, rules })
    }

    /// Build the registry from the bundled reference data.
    ///
    /// # Errors
    ///
    /// Returns [`DataError`] if the bundled data is inconsistent.
    pub fn bundled() -> Result<Self, DataError> {
        Self::new(ReferenceData::bundled()?)
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Look up a keyword's metadata. Keywords are case-sensitive.
    pub fn spec(&self, keyword: &str) -> Option<&RuleSpec> {
        self.rules.get(keyword).map(|registration| &registration.spec)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.rules.contains_key(keyword)
    }

    /// Iterate over the keywords in rule table order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn get(&self, keyword: &str) -> Option<&Registration> {
        self.rules.get(keyword)
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("keywords", &self.rules.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

fn check_catalog(data: &ReferenceData, keyword: &str, kind: &RuleKind) -> Result<(), DataError> {
    let empty = match kind {
        RuleKind::Class => data.items().classes().is_empty(),
        RuleKind::BaseType => data.items().index().is_empty(),
        RuleKind::ExplicitMod => data.mods().is_empty(),
        RuleKind::AlertSound => data.sounds().identifiers().is_empty(),
        _ => false,
    };

    if empty {
        Err(DataError::integrity(
            keyword,
            "the catalog this rule matches values against is empty",
        ))
    } else {
        Ok(())
    }
}
