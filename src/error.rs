//! Error types shared across the application
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while reading the photo library or config
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem access failed for a specific path
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal of the library root failed
    #[error("failed to walk photo library: {0}")]
    Walk(#[from] walkdir::Error),

    /// The blocking worker running a library scan panicked or was cancelled
    #[error("background task failed: {0}")]
    Join(String),

    /// The configuration file could not be parsed
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
