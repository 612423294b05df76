// Rust guideline compliant 2026-10-16

//! Error handling for the jsonfold command line.

use jsonfold_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Stable error codes for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A path segment has disallowed characters.
    InvalidPath,
    /// A path resolves outside the project root.
    PathEscape,
    /// A file extension is not supported.
    UnsupportedExtension,
    /// A required input is missing.
    FileNotFound,
    /// A file exceeds the read ceiling.
    FileTooLarge,
    /// An input is malformed.
    ParseError,
    /// IO failure while reading or writing files.
    IoError,
    /// JSON serialization failed.
    JsonError,
    /// Configuration file, environment or flags are invalid.
    ConfigError,
    /// Another process holds the output lock.
    Locked,
}

/// CLI-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration values are invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configuration file could not be read.
    #[error("Cannot read config file {}: {source}", path.display())]
    ConfigRead {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The output lock is held elsewhere or could not be taken.
    #[error("Failed to acquire lock {}: {source}", path.display())]
    Locked {
        /// Lock file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Config(_) | CliError::ConfigRead { .. } => ErrorCode::ConfigError,
            CliError::Locked { .. } => ErrorCode::Locked,
            CliError::Core(core) => match core {
                CoreError::InvalidPath { .. } => ErrorCode::InvalidPath,
                CoreError::PathEscape { .. } => ErrorCode::PathEscape,
                CoreError::UnsupportedExtension { .. } => ErrorCode::UnsupportedExtension,
                CoreError::FileNotFound { .. } => ErrorCode::FileNotFound,
                CoreError::FileTooLarge { .. } => ErrorCode::FileTooLarge,
                CoreError::Parse { .. } => ErrorCode::ParseError,
                CoreError::Io { .. } => ErrorCode::IoError,
                CoreError::Serialize(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            CliError::ConfigRead { path, .. } | CliError::Locked { path, .. } => {
                Some(serde_json::json!({ "path": path }))
            }
            CliError::Config(_) => None,
            CliError::Core(core) => match core {
                CoreError::InvalidPath { path, segment } => Some(serde_json::json!({
                    "path": path,
                    "segment": segment,
                })),
                CoreError::PathEscape { path } | CoreError::UnsupportedExtension { path, .. } => {
                    Some(serde_json::json!({ "path": path }))
                }
                CoreError::FileNotFound { path }
                | CoreError::Parse { path, .. }
                | CoreError::Io { path, .. } => Some(serde_json::json!({ "path": path })),
                CoreError::FileTooLarge {
                    path,
                    size_mib,
                    limit_mib,
                } => Some(serde_json::json!({
                    "path": path,
                    "size_mib": size_mib,
                    "limit_mib": limit_mib,
                })),
                CoreError::Serialize(_) => None,
            },
        }
    }
}
