//! Configuration types for Lootfilter validation.
//!
//! This module provides the configuration structures that control how
//! filters are validated. All types implement [`serde::Deserialize`] so they
//! can be loaded from a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`WhitelistConfig`] - Values accepted even though the reference data
//!   does not know them.
//! - [`SoundConfig`] - Custom alert sound checks.
//! - [`ModConfig`] - Explicit mod lookup options.
//!
//! # Example
//!
//! ```toml
//! [whitelist]
//! bases = ["Maelström of Chaos"]
//!
//! [sounds]
//! verify_custom = true
//! folder = "/home/exile/sounds"
//!
//! [mods]
//! limited_pool = false
//! ```

use std::path::{Path, PathBuf};

use directories::UserDirs;
use serde::Deserialize;

use lootfilter_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Whitelist section.
    #[serde(default)]
    whitelist: WhitelistConfig,

    /// Custom sound section.
    #[serde(default)]
    sounds: SoundConfig,

    /// Explicit mod section.
    #[serde(default)]
    mods: ModConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(whitelist: WhitelistConfig, sounds: SoundConfig, mods: ModConfig) -> Self {
        Self {
            whitelist,
            sounds,
            mods,
        }
    }

    /// Returns the whitelist configuration.
    pub fn whitelist(&self) -> &WhitelistConfig {
        &self.whitelist
    }

    /// Returns the custom sound configuration.
    pub fn sounds(&self) -> &SoundConfig {
        &self.sounds
    }

    /// Returns the explicit mod configuration.
    pub fn mods(&self) -> &ModConfig {
        &self.mods
    }

    /// Build the options the parser runs with.
    ///
    /// The sound folder falls back to [`default_sound_folder`] when none is
    /// configured.
    pub fn to_parse_config(&self) -> ParseConfig {
        let whitelist = &self.whitelist;
        let config = ParseConfig::default()
            .with_rule_whitelist(&whitelist.rules)
            .with_class_whitelist(&whitelist.classes)
            .with_base_whitelist(&whitelist.bases)
            .with_sound_whitelist(&whitelist.sounds)
            .with_mod_whitelist(&whitelist.mods)
            .with_limited_mod_pool(self.mods.limited_pool)
            .with_custom_sound_verification(self.sounds.verify_custom);

        match self.sounds.folder() {
            Some(folder) => config.with_sound_folder(folder),
            None => config,
        }
    }
}

/// Values accepted in addition to the reference data.
///
/// Rule keywords and sound identifiers match entries exactly; classes, base
/// types and mods match any substring of an entry.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct WhitelistConfig {
    #[serde(default)]
    rules: Vec<String>,

    #[serde(default)]
    classes: Vec<String>,

    #[serde(default)]
    bases: Vec<String>,

    #[serde(default)]
    sounds: Vec<String>,

    #[serde(default)]
    mods: Vec<String>,
}

impl WhitelistConfig {
    /// Creates a whitelist that only accepts the given rule keywords.
    pub fn with_rules(rules: Vec<String>) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    pub fn sounds(&self) -> &[String] {
        &self.sounds
    }

    pub fn mods(&self) -> &[String] {
        &self.mods
    }
}

/// Custom alert sound checks.
#[derive(Debug, Clone, Deserialize)]
pub struct SoundConfig {
    /// Check that `CustomAlertSound` files exist.
    #[serde(default = "default_verify_custom")]
    verify_custom: bool,

    /// Folder relative sound paths are resolved against.
    #[serde(default)]
    folder: Option<PathBuf>,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            verify_custom: default_verify_custom(),
            folder: None,
        }
    }
}

impl SoundConfig {
    /// Creates a new [`SoundConfig`].
    ///
    /// # Arguments
    ///
    /// * `verify_custom` - Whether custom sound files must exist.
    /// * `folder` - Folder for relative sound paths, or `None` for the
    ///   game's default folder.
    pub fn new(verify_custom: bool, folder: Option<PathBuf>) -> Self {
        Self {
            verify_custom,
            folder,
        }
    }

    pub fn verify_custom(&self) -> bool {
        self.verify_custom
    }

    /// Returns the configured folder, or the game's default folder.
    pub fn folder(&self) -> Option<PathBuf> {
        self.folder.clone().or_else(default_sound_folder)
    }

    /// Returns the folder exactly as configured.
    pub fn configured_folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }
}

fn default_verify_custom() -> bool {
    true
}

/// Explicit mod lookup options.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ModConfig {
    /// Match `HasExplicitMod` values against the limited pool only.
    #[serde(default)]
    limited_pool: bool,
}

impl ModConfig {
    pub fn new(limited_pool: bool) -> Self {
        Self { limited_pool }
    }

    pub fn limited_pool(&self) -> bool {
        self.limited_pool
    }
}

/// The folder the game reads custom sounds from: `My Games/Path of Exile`
/// inside the user's documents directory.
///
/// Returns `None` when the platform has no documents directory.
pub fn default_sound_folder() -> Option<PathBuf> {
    let dirs = UserDirs::new()?;
    dirs.document_dir()
        .map(|documents| documents.join("My Games").join("Path of Exile"))
}
