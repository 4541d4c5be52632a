//! Command-line argument definitions for the Lootfilter CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the filter to check, configuration and
//! reference data overrides, the report format and logging verbosity.

use clap::{Parser, ValueEnum};

/// How the validation report is written to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered diagnostics with source snippets
    #[default]
    Pretty,
    /// The full result, including colors and sounds, as JSON
    Json,
}

/// Command-line arguments for the Lootfilter validator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the filter file
    #[arg(help = "Path to the filter file")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory with replacement reference data (rules.json, items.json,
    /// mods.json, sounds.json)
    #[arg(short, long)]
    pub data_dir: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
