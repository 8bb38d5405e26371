//! Error types for velox-fs

use std::path::PathBuf;

use crate::DocumentKind;

/// Result type for velox-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or reading parameter documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{kind} parameter file not found: {path}")]
    DocumentNotFound { kind: DocumentKind, path: PathBuf },

    #[error("Document at {path} is not valid UTF-8: {source}")]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML document at {path}: {source}")]
    DocumentParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Wrap a read failure, separating undecodable content from I/O faults.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::InvalidEncoding { path, source }
        } else {
            Self::Io { path, source }
        }
    }

    /// Path of the document the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::DocumentNotFound { path, .. }
            | Self::InvalidEncoding { path, .. }
            | Self::DocumentParse { path, .. } => path,
        }
    }
}
