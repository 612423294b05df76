// Rust guideline compliant 2026-10-16

//! Jsonfold Core Library
//!
//! This crate merges an ordered list of JSON-like configuration files into
//! one output file:
//! - Path guard (project-root confinement, extension allow-list)
//! - Safe IO (bounded reads, atomic commits, backups)
//! - Multi-format parsing (JSON, JSONC, JSON5)
//! - Deep merge with a configurable array policy
//! - The skip / preview / commit decision for each run
//! - Error types and result handling

pub mod decision;
pub mod error;
pub mod format;
pub mod merge;
pub mod path_guard;
pub mod safe_io;

pub use decision::{merge_files, render, MergeOptions, MergeOutcome};
pub use error::{Error, Result};
pub use format::{parse, Format};
pub use merge::{deep_merge, merge_values, ArrayStrategy};
pub use path_guard::{ensure_extension_allowed, validate_segments, PathGuard};
pub use safe_io::{backup_path_for, commit, modified_millis, read_text, MAX_FILE_SIZE};
