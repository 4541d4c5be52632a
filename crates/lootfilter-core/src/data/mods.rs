use serde::Deserialize;

/// Explicit mod names accepted by `HasExplicitMod`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModCatalog {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    /// A smaller pool used when the limited mod pool is enabled.
    #[serde(default)]
    limited: Vec<String>,
}

impl ModCatalog {
    pub fn new(prefixes: Vec<String>, suffixes: Vec<String>, limited: Vec<String>) -> Self {
        Self {
            prefixes,
            suffixes,
            limited,
        }
    }

    /// Returns `true` if `value` is a substring of a mod name.
    ///
    /// With `limited_pool` set only the limited pool is searched; otherwise
    /// prefixes are searched before suffixes.
    pub fn matches(&self, value: &str, limited_pool: bool) -> bool {
        let contains = |names: &[String]| names.iter().any(|name| name.contains(value));
        if limited_pool {
            contains(&self.limited)
        } else {
            contains(&self.prefixes) || contains(&self.suffixes)
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn limited(&self) -> &[String] {
        &self.limited
    }

    /// Returns the number of prefix and suffix names.
    pub fn len(&self) -> usize {
        self.prefixes.len() + self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
