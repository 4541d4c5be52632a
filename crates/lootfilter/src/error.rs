//! Error types for Lootfilter operations.
//!
//! Problems inside a filter are never errors; they are reported as
//! diagnostics in a [`FilterParseResult`](crate::FilterParseResult).
//! [`LootFilterError`] covers everything that stops a validation from
//! running at all.

use std::io;

use thiserror::Error;

use lootfilter_core::data::DataError;

/// The main error type for Lootfilter operations.
#[derive(Debug, Error)]
pub enum LootFilterError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Reference data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),
}
