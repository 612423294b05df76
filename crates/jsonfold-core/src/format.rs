// Rust guideline compliant 2026-10-16

//! Multi-format parsing for JSON-like configuration files.
//!
//! The set of formats here is also the extension allow-list used by
//! [`crate::PathGuard`], so both stay in one place.

use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// A recognized input format, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Plain JSON, comments tolerated.
    Json,
    /// JSON with `//` and `/* */` comments.
    Jsonc,
    /// JSON5: comments, trailing commas, unquoted keys, single-quoted strings.
    Json5,
}

impl Format {
    /// Every supported format, in allow-list order.
    pub const ALL: [Format; 3] = [Format::Json, Format::Jsonc, Format::Json5];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Jsonc => "jsonc",
            Format::Json5 => "json5",
        }
    }

    /// Human-readable format name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Jsonc => "JSONC",
            Format::Json5 => "JSON5",
        }
    }

    /// Detects the format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Format::ALL.into_iter().find(|f| f.extension() == ext)
    }
}

/// Returns the allowed extensions formatted as `.json, .jsonc, .json5`.
pub fn allowed_extensions() -> String {
    Format::ALL
        .iter()
        .map(|f| format!(".{}", f.extension()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses file content into a structured value according to its extension.
///
/// `.json5` files go through the relaxed JSON5 parser. Everything else is
/// parsed as JSON after comments are blanked out.
///
/// The JSON5 parser reads integers as `i64`, so integer literals above
/// `i64::MAX` are rejected in `.json5` files while `.json` and `.jsonc`
/// accept them as `u64`.
///
/// # Errors
///
/// Returns [`Error::Parse`] naming the format, the path and the parser's
/// message when the content is malformed.
pub fn parse(path: &Path, text: &str) -> Result<Value> {
    let format = Format::from_path(path).unwrap_or(Format::Jsonc);
    let parsed = match format {
        Format::Json5 => json5::from_str::<Value>(text).map_err(|e| e.to_string()),
        Format::Json | Format::Jsonc => {
            serde_json::from_str::<Value>(&strip_comments(text)).map_err(|e| e.to_string())
        }
    };

    parsed.map_err(|message| Error::Parse {
        format: format.name(),
        path: path.to_path_buf(),
        message,
    })
}

/// Replaces `//` line comments and `/* */` block comments with whitespace.
///
/// String literals are left untouched, and newlines inside comments are kept
/// so parser line/column positions still point at the original text.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                chars.next();
                out.push_str("  ");
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                    out.push(' ');
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                while let Some(next) = chars.next() {
                    if next == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        out.push_str("  ");
                        break;
                    }
                    out.push(if next == '\n' { '\n' } else { ' ' });
                }
            }
            _ => out.push(c),
        }
    }

    out
}
