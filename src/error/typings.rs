/// Error types for declaration stub generation
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypingsError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot read current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TypingsError {
    /// Create an Io error bound to the path that failed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O failure, if any
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } | Self::CurrentDir(source) => Some(source.kind()),
            Self::Serialization(_) => None,
        }
    }
}

/// Result type alias for typings operations
pub type TypingsResult<T> = Result<T, TypingsError>;
