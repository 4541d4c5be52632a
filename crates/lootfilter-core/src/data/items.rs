//! Item classes, their base types, and the global base type index.

use serde::Deserialize;

/// `BaseType` values are checked against the bases of the block's captured
/// classes only when the captured classes match at most this many catalog
/// classes. Broader captures fall back to the global index.
pub const CLASS_NARROWING_LIMIT: usize = 5;

/// On-disk shape of `items.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsFile {
    pub(crate) classes: Vec<ItemClass>,
}

/// An item class and the base types that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemClass {
    name: String,
    bases: Vec<String>,
}

impl ItemClass {
    pub fn new(name: impl Into<String>, bases: Vec<String>) -> Self {
        Self {
            name: name.into(),
            bases,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    /// Returns `true` if any base of this class contains `value`.
    pub fn has_base_containing(&self, value: &str) -> bool {
        self.bases.iter().any(|base| base.contains(value))
    }
}

/// Every base type name, sorted by byte length and then lexicographically.
///
/// A substring can never be longer than the string containing it, so a
/// search for `value` starts at the first name at least as long as `value`.
/// `jump[n]` holds that position for every length `n` up to the longest name.
#[derive(Debug, Clone, Default)]
pub struct BaseIndex {
    names: Vec<String>,
    jump: Vec<usize>,
}

impl BaseIndex {
    /// Build the index from base names. Duplicates are removed.
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        names.dedup();

        let longest = names.last().map_or(0, String::len);
        let mut jump = Vec::with_capacity(longest + 1);
        let mut position = 0;
        for length in 0..=longest {
            while position < names.len() && names[position].len() < length {
                position += 1;
            }
            jump.push(position);
        }

        Self { names, jump }
    }

    /// Returns `true` if `value` is a substring of any indexed name.
    pub fn contains_substring(&self, value: &str) -> bool {
        match self.jump.get(value.len()) {
            Some(&start) => self.names[start..].iter().any(|name| name.contains(value)),
            None => false,
        }
    }

    /// Returns the sorted names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Where `BaseType` values are looked up for one rule.
#[derive(Debug, Clone)]
pub enum BaseScope<'a> {
    /// Only the bases of these classes.
    Classes(Vec<&'a ItemClass>),
    /// Every known base.
    Global(&'a BaseIndex),
}

impl BaseScope<'_> {
    /// Returns `true` if `value` is a substring of a base in scope.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            BaseScope::Classes(classes) => classes
                .iter()
                .any(|class| class.has_base_containing(value)),
            BaseScope::Global(index) => index.contains_substring(value),
        }
    }
}

/// The item class catalog with its derived base index.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    classes: Vec<ItemClass>,
    index: BaseIndex,
}

impl ItemCatalog {
    pub fn new(classes: Vec<ItemClass>) -> Self {
        let index = BaseIndex::new(
            classes
                .iter()
                .flat_map(|class| class.bases.iter().cloned()),
        );
        Self { classes, index }
    }

    pub fn classes(&self) -> &[ItemClass] {
        &self.classes
    }

    pub fn index(&self) -> &BaseIndex {
        &self.index
    }

    /// Returns `true` if `value` is a substring of any class name.
    pub fn class_matches(&self, value: &str) -> bool {
        self.classes.iter().any(|class| class.name.contains(value))
    }

    /// Choose the lookup scope for `BaseType` values given the class strings
    /// captured in the current block.
    ///
    /// Candidate classes are those whose name contains any captured string.
    /// Between one and [`CLASS_NARROWING_LIMIT`] candidates narrow the scope
    /// to their bases; anything else uses the global index.
    pub fn base_scope(&self, captured: &[String]) -> BaseScope<'_> {
        if captured.is_empty() {
            return BaseScope::Global(&self.index);
        }

        let candidates: Vec<&ItemClass> = self
            .classes
            .iter()
            .filter(|class| captured.iter().any(|value| class.name.contains(value.as_str())))
            .collect();

        if (1..=CLASS_NARROWING_LIMIT).contains(&candidates.len()) {
            BaseScope::Classes(candidates)
        } else {
            BaseScope::Global(&self.index)
        }
    }
}
