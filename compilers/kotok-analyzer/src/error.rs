use std::io;

use thiserror::Error;

/// Failure of the morphological-analysis backend. The display text carries
/// the backend's own diagnostic.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to start analyzer {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("analyzer I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("analyzer exited with {status}: {message}")]
    Backend { status: String, message: String },

    #[error("malformed analyzer output at line {line}: {content:?}")]
    MalformedOutput { line: usize, content: String },

    #[error("analyzer engine error: {0}")]
    Engine(String),
}
