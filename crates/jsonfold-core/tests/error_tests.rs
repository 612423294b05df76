// Rust guideline compliant 2026-10-16

//! Unit tests for error types and messages.
//!
//! Every error surfaced to the caller must name the offending path and the reason.

use jsonfold_core::Error;
use std::path::PathBuf;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::io(&PathBuf::from("/p/out.json"), io_err);
    let msg = error.to_string();
    assert_eq!(msg, "IO error on /p/out.json: denied");
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::from(json_err);
    assert!(error.to_string().starts_with("JSON error"));
}

#[test]
fn test_invalid_path_formatting() {
    let error = Error::InvalidPath {
        path: "conf/a b.json".to_string(),
        segment: "a b.json".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid path conf/a b.json: segment \"a b.json\" contains disallowed characters"
    );
}

#[test]
fn test_path_escape_formatting() {
    let error = Error::PathEscape {
        path: "../etc/passwd.json".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Path escapes project root: ../etc/passwd.json"
    );
}

#[test]
fn test_unsupported_extension_formatting() {
    let error = Error::UnsupportedExtension {
        path: "a.yaml".to_string(),
        expected: ".json, .jsonc, .json5".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Unsupported file extension: a.yaml (expected one of .json, .jsonc, .json5)"
    );
}

#[test]
fn test_file_not_found_formatting() {
    let error = Error::FileNotFound {
        path: PathBuf::from("/p/missing.json"),
    };
    assert_eq!(error.to_string(), "File not found: /p/missing.json");
}

#[test]
fn test_file_too_large_formatting() {
    let error = Error::FileTooLarge {
        path: PathBuf::from("/p/big.json"),
        size_mib: 150.5,
        limit_mib: 100,
    };
    assert_eq!(
        error.to_string(),
        "File too large: /p/big.json (150.50 MiB exceeds the 100 MiB limit)"
    );
}

#[test]
fn test_parse_error_formatting() {
    let error = Error::Parse {
        format: "JSON5",
        path: PathBuf::from("/p/a.json5"),
        message: "unexpected token".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Failed to parse JSON5 file /p/a.json5: unexpected token"
    );
}
