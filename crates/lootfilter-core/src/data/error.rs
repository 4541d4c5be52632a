use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading or checking reference data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read reference data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse reference data file {file}: {source}")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inconsistent reference data for {subject}: {reason}")]
    Integrity { subject: String, reason: String },
}

impl DataError {
    /// Create an integrity error for a table entry.
    pub fn integrity(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Integrity {
            subject: subject.into(),
            reason: reason.into(),
        }
    }
}
