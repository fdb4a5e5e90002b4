//! Error types for leetsync

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("No file name can be derived from {url}")]
    MissingFileName { url: String },

    #[error("No scraped problem matches {url}")]
    ProblemNotFound { url: String },

    #[error("The scraped problem list is empty")]
    EmptyCatalog,

    #[error("{path} already belongs to {existing_url}")]
    SlugCollision { path: PathBuf, existing_url: String },

    #[error("Editor surface error: {0}")]
    Editor(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
