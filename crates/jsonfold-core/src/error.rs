// Rust guideline compliant 2026-10-16

//! Error types for the jsonfold core library.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for jsonfold operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for jsonfold operations.
///
/// Every variant is terminal for the merge that raised it.
#[derive(Debug, Error)]
pub enum Error {
    /// A path segment contains characters outside `[A-Za-z0-9._-]`.
    #[error("Invalid path {path}: segment {segment:?} contains disallowed characters")]
    InvalidPath {
        /// The path as supplied by the caller.
        path: String,
        /// The first offending segment.
        segment: String,
    },

    /// The path resolves outside the project root.
    #[error("Path escapes project root: {path}")]
    PathEscape {
        /// The path as supplied by the caller.
        path: String,
    },

    /// The file extension is not one of the recognized formats.
    #[error("Unsupported file extension: {path} (expected one of {expected})")]
    UnsupportedExtension {
        /// The path as supplied by the caller.
        path: String,
        /// Comma-separated list of allowed extensions.
        expected: String,
    },

    /// A required input does not exist or is not a regular file.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Resolved absolute path.
        path: PathBuf,
    },

    /// A file exceeds the read ceiling.
    #[error("File too large: {} ({size_mib:.2} MiB exceeds the {limit_mib} MiB limit)", path.display())]
    FileTooLarge {
        /// Resolved absolute path.
        path: PathBuf,
        /// Actual size in MiB.
        size_mib: f64,
        /// Ceiling in MiB.
        limit_mib: u64,
    },

    /// File content is malformed for its format.
    #[error("Failed to parse {format} file {}: {message}", path.display())]
    Parse {
        /// Format name used for parsing.
        format: &'static str,
        /// Resolved absolute path.
        path: PathBuf,
        /// Underlying parser message.
        message: String,
    },

    /// IO failure while reading, backing up, or committing a file.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The merged value could not be serialized.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an IO error with the path it occurred on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
