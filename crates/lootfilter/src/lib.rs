//! Lootfilter - a validator for item filter scripts.
//!
//! Checks every line of a filter against the game's rule table and reference
//! data, reporting problems as diagnostics and collecting the colors and
//! sounds the filter uses so editors can show swatches and play buttons.

pub mod config;

mod error;

pub use lootfilter_core::{color, data, sound, text};
pub use lootfilter_parser::{
    FilterParseResult, ParseConfig,
    error::{Diagnostic, ErrorCode, Severity},
};

pub use error::LootFilterError;

use std::{fs, path::Path, sync::Arc};

use log::{debug, info};

use lootfilter_core::data::ReferenceData;
use lootfilter_parser::RuleRegistry;

use config::AppConfig;

/// Validator for item filter documents.
///
/// The rule registry is built once and shared, so clones are cheap and can
/// validate documents on different threads.
///
/// # Examples
///
/// ```
/// use lootfilter::{FilterValidator, config::AppConfig};
///
/// let validator = FilterValidator::new(AppConfig::default())
///     .expect("Failed to load reference data");
///
/// let result = validator.validate("Show\n    ItemLevel >= 50\n");
/// assert!(!result.has_errors());
/// ```
#[derive(Debug, Clone)]
pub struct FilterValidator {
    registry: Arc<RuleRegistry>,
    parse_config: ParseConfig,
}

impl FilterValidator {
    /// Create a validator using the bundled reference data.
    ///
    /// # Arguments
    ///
    /// * `config` - Whitelists, sound and mod options
    ///
    /// # Errors
    ///
    /// Returns `LootFilterError::Data` if the bundled data is inconsistent.
    pub fn new(config: AppConfig) -> Result<Self, LootFilterError> {
        Self::with_reference_data(config, ReferenceData::bundled()?)
    }

    /// Create a validator using the given reference data.
    ///
    /// # Arguments
    ///
    /// * `config` - Whitelists, sound and mod options
    /// * `data` - Rule table and catalogs, for example loaded with
    ///   [`ReferenceData::from_dir`]
    ///
    /// # Errors
    ///
    /// Returns `LootFilterError::Data` if a rule needs a catalog that is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lootfilter::{FilterValidator, config::AppConfig, data::ReferenceData};
    ///
    /// let data = ReferenceData::from_dir("data").expect("Failed to load data");
    /// let validator = FilterValidator::with_reference_data(AppConfig::default(), data)
    ///     .expect("Inconsistent data");
    /// ```
    pub fn with_reference_data(
        config: AppConfig,
        data: ReferenceData,
    ) -> Result<Self, LootFilterError> {
        let registry = RuleRegistry::new(data)?;
        info!(rules = registry.len(); "Rule registry ready");

        Ok(Self {
            registry: Arc::new(registry),
            parse_config: config.to_parse_config(),
        })
    }

    /// Returns the registry the validator dispatches on.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Returns the options the parser runs with.
    pub fn parse_config(&self) -> &ParseConfig {
        &self.parse_config
    }

    /// Validate a filter document.
    ///
    /// Never fails: every problem in the document is a diagnostic in the
    /// result.
    pub fn validate(&self, source: &str) -> FilterParseResult {
        info!(bytes = source.len(); "Validating filter");

        let result = lootfilter_parser::parse(source, &self.registry, &self.parse_config);

        debug!(
            diagnostics = result.diagnostics().len(),
            has_errors = result.has_errors();
            "Filter validated"
        );
        result
    }

    /// Read and validate a filter file.
    ///
    /// # Errors
    ///
    /// Returns `LootFilterError::Io` if the file cannot be read.
    pub fn validate_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<FilterParseResult, LootFilterError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Reading filter file");

        let source = fs::read_to_string(path)?;
        Ok(self.validate(&source))
    }

    /// Validate a filter document from async code.
    ///
    /// Validation does not wait on anything, so the future completes on its
    /// first poll.
    pub async fn validate_async(&self, source: &str) -> FilterParseResult {
        self.validate(source)
    }
}
