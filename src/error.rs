//! Error types for article_catalog

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for article_catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while loading inputs or writing a site.
///
/// A missing or unknown article is not an error: the detail flow reports
/// those as a [`crate::DetailOutcome`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid progress bar template: {0}")]
    ProgressStyle(#[from] indicatif::style::TemplateError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
