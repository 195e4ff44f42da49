//! Prompt loading errors.

use std::path::PathBuf;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or configuring templates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The storage back end cannot resolve the path.
    #[error("prompt template not found at: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    /// The template exists but could not be read.
    #[error("failed to read prompt template {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A custom placeholder pattern is unusable.
    #[error("invalid placeholder pattern: {0}")]
    InvalidPattern(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern(err.to_string())
    }
}
