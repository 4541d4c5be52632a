//! Per-parse options.

use std::path::{Path, PathBuf};

/// User options that change how a filter is validated.
///
/// Whitelists let users accept values the bundled reference data does not
/// know yet, such as items from a new game patch. Rule keywords and sound
/// identifiers must match a whitelist entry exactly; class, base type and
/// mod values may match any substring of an entry, like catalog values do.
///
/// # Example
///
/// ```
/// # use lootfilter_parser::ParseConfig;
/// let config = ParseConfig::default()
///     .with_base_whitelist(["Maelström of Chaos"])
///     .with_limited_mod_pool(true);
/// assert!(config.is_whitelisted_base("Maelström"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseConfig {
    rule_whitelist: Vec<String>,
    class_whitelist: Vec<String>,
    base_whitelist: Vec<String>,
    sound_whitelist: Vec<String>,
    mod_whitelist: Vec<String>,
    limited_mod_pool: bool,
    /// Check that custom sound files exist. Disabled by default.
    verify_custom_sounds: bool,
    sound_folder: Option<PathBuf>,
}

impl ParseConfig {
    pub fn with_rule_whitelist<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule_whitelist = rules.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_class_whitelist<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_whitelist = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_base_whitelist<I, S>(mut self, bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_whitelist = bases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sound_whitelist<I, S>(mut self, sounds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sound_whitelist = sounds.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mod_whitelist<I, S>(mut self, mods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mod_whitelist = mods.into_iter().map(Into::into).collect();
        self
    }

    /// Match `HasExplicitMod` values against the limited mod pool only.
    pub fn with_limited_mod_pool(mut self, enabled: bool) -> Self {
        self.limited_mod_pool = enabled;
        self
    }

    /// Report `CustomAlertSound` files that do not exist.
    pub fn with_custom_sound_verification(mut self, enabled: bool) -> Self {
        self.verify_custom_sounds = enabled;
        self
    }

    /// Folder that relative custom sound paths are resolved against.
    pub fn with_sound_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.sound_folder = Some(folder.into());
        self
    }

    pub fn is_whitelisted_rule(&self, keyword: &str) -> bool {
        self.rule_whitelist.iter().any(|rule| rule == keyword)
    }

    pub fn is_whitelisted_class(&self, value: &str) -> bool {
        contains_substring(&self.class_whitelist, value)
    }

    pub fn is_whitelisted_base(&self, value: &str) -> bool {
        contains_substring(&self.base_whitelist, value)
    }

    pub fn is_whitelisted_sound(&self, identifier: &str) -> bool {
        self.sound_whitelist.iter().any(|sound| sound == identifier)
    }

    pub fn is_whitelisted_mod(&self, value: &str) -> bool {
        contains_substring(&self.mod_whitelist, value)
    }

    pub fn limited_mod_pool(&self) -> bool {
        self.limited_mod_pool
    }

    pub fn verify_custom_sounds(&self) -> bool {
        self.verify_custom_sounds
    }

    pub fn sound_folder(&self) -> Option<&Path> {
        self.sound_folder.as_deref()
    }
}

fn contains_substring(entries: &[String], value: &str) -> bool {
    entries.iter().any(|entry| entry.contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_accepts_nothing_extra() {
        let config = ParseConfig::default();

        assert!(!config.is_whitelisted_rule("Continue"));
        assert!(!config.is_whitelisted_base("Orb"));
        assert!(!config.limited_mod_pool());
        assert!(!config.verify_custom_sounds());
        assert!(config.sound_folder().is_none());
    }

    #[test]
    fn test_rule_and_sound_whitelists_match_exactly() {
        let config = ParseConfig::default()
            .with_rule_whitelist(["Continue"])
            .with_sound_whitelist(["ShCustom"]);

        assert!(config.is_whitelisted_rule("Continue"));
        assert!(!config.is_whitelisted_rule("Cont"));
        assert!(config.is_whitelisted_sound("ShCustom"));
        assert!(!config.is_whitelisted_sound("shcustom"));
    }

    #[test]
    fn test_value_whitelists_match_substrings() {
        let config = ParseConfig::default()
            .with_class_whitelist(["Heist Brooch"])
            .with_mod_whitelist(["of the Veil"]);

        assert!(config.is_whitelisted_class("Brooch"));
        assert!(config.is_whitelisted_mod("Veil"));
        assert!(!config.is_whitelisted_mod("Catarina"));
    }

    #[test]
    fn test_sound_folder() {
        let config = ParseConfig::default().with_sound_folder("/games/sounds");
        assert_eq!(config.sound_folder(), Some(Path::new("/games/sounds")));
    }
}
