// Rust guideline compliant 2026-10-16

//! Diagnostic logging setup.
//!
//! The core emits `tracing` events; this module installs the subscriber that
//! writes them to stderr so stdout stays reserved for results.

use crate::error::{CliError, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;

/// Parses a log level name.
///
/// # Errors
///
/// Returns a configuration error for unknown names.
pub fn parse_log_level(level: &str) -> Result<LevelFilter> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        other => Err(CliError::Config(format!("unknown log level: {other}"))),
    }
}

/// Installs the global stderr subscriber.
///
/// A second call is a no-op; the first subscriber stays installed.
///
/// # Errors
///
/// Returns a configuration error if `level` is not a known level name.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(());
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_is_case_insensitive() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_log_level("warn").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::OFF);
    }

    #[test]
    fn test_parse_log_level_rejects_unknown() {
        let err = parse_log_level("loud").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("loud"));
    }
}
