//! Error types for velox-params

use std::path::PathBuf;

/// Result type for velox-params operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a parameter resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing, unreadable or malformed document
    #[error(transparent)]
    Fs(#[from] velox_fs::Error),

    /// A recognized key holds something other than a number
    #[error("Field '{key}' in {group} parameters of {path} must be a number, found {found}")]
    FieldType {
        path: PathBuf,
        group: &'static str,
        key: &'static str,
        found: &'static str,
    },

    /// Vehicle document whose top level cannot hold parameters
    #[error("Invalid parameter document at {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    #[error("Unknown vehicle id: {id}")]
    UnknownVehicle { id: i32 },
}
