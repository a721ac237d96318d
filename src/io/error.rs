//! Error types for word list loading and puzzle export
//!
//! Generation itself never fails; only the file-facing layer produces these.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all file-facing operations
#[derive(Debug)]
pub enum WordSearchError {
    /// Failed to read a word list from the filesystem
    WordListLoad {
        /// Path to the word list file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Puzzle could not be serialized to JSON
    Serialization {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serializer error
        source: serde_json::Error,
    },

    /// Failed to save the answer key image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for WordSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordListLoad { path, source } => {
                write!(f, "Failed to load word list '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize puzzle to '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WordSearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordListLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for file-facing results
pub type Result<T> = std::result::Result<T, WordSearchError>;

impl From<std::io::Error> for WordSearchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WordSearchError {
    WordSearchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> WordSearchError {
    WordSearchError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
