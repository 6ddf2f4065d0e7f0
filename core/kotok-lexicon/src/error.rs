use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Startup-time configuration failures. None of these occur per request.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid minimum token length {value:?}: {source}")]
    InvalidMinLength {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to archive lexicon: {0}")]
    Archive(String),

    #[error("corrupt lexicon archive: {0}")]
    CorruptArchive(String),
}
