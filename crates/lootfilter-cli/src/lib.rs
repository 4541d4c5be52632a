//! Lootfilter CLI library
//!
//! This module contains the core CLI logic for the Lootfilter validator.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::{fs, io::Write};

use log::info;
use miette::GraphicalReportHandler;

use lootfilter::{
    FilterParseResult, FilterValidator, LootFilterError, Severity, data::ReferenceData,
};

use error_adapter::to_reportables;

/// Run the Lootfilter CLI application
///
/// Validates the input file and writes the report to `out`. The returned
/// result tells the caller whether any diagnostic is an error.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `out` - Where the report is written
///
/// # Errors
///
/// Returns `LootFilterError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Reference data loading errors
pub fn run(args: &Args, out: &mut impl Write) -> Result<FilterParseResult, LootFilterError> {
    info!(input_path = args.input; "Validating filter");

    let app_config = config::load_config(args.config.as_ref())?;

    let validator = match &args.data_dir {
        Some(dir) => {
            let data = ReferenceData::from_dir(dir)?;
            FilterValidator::with_reference_data(app_config, data)?
        }
        None => FilterValidator::new(app_config)?,
    };

    let source = fs::read_to_string(&args.input)?;
    let result = validator.validate(&source);

    match args.format {
        OutputFormat::Pretty => write_pretty(out, &args.input, &source, &result)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }

    info!(
        diagnostics = result.diagnostics().len(),
        has_errors = result.has_errors();
        "Validation finished"
    );

    Ok(result)
}

/// Render every diagnostic followed by a one-line summary.
fn write_pretty(
    out: &mut impl Write,
    input: &str,
    source: &str,
    result: &FilterParseResult,
) -> Result<(), LootFilterError> {
    let reporter = GraphicalReportHandler::new();

    for reportable in to_reportables(result, source) {
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &reportable)
            .map_err(std::io::Error::other)?;
        writeln!(out, "{writer}")?;
    }

    let count = |severity: Severity| {
        result
            .diagnostics()
            .iter()
            .filter(|diagnostic| diagnostic.severity() == severity)
            .count()
    };
    let errors = count(Severity::Error);
    let warnings = count(Severity::Warning);
    let other = result.diagnostics().len() - errors - warnings;

    writeln!(
        out,
        "{input}: {errors} error(s), {warnings} warning(s), {other} hint(s)"
    )?;
    Ok(())
}
