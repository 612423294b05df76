// Rust guideline compliant 2026-10-16

//! Output formatting module for the jsonfold CLI.
//!
//! This module renders merge outcomes and errors either as short
//! human-readable lines or as JSON envelopes for machine consumption.

use crate::error::CliError;
use crate::response::{ErrorEnvelope, SuccessEnvelope};
use jsonfold_core::MergeOutcome;
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for rendering the result of one run.
pub trait OutputFormatter {
    /// Formats a merge outcome for display.
    ///
    /// # Arguments
    /// * `outcome` - The outcome to format
    ///
    /// # Returns
    /// A formatted string representation of the outcome
    fn format_outcome(&self, outcome: &MergeOutcome) -> String;

    /// Formats an error for display.
    ///
    /// # Arguments
    /// * `error` - The error to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &CliError) -> String;
}

/// JSON output formatter.
///
/// Wraps outcomes in `{"status":"ok","result":...}` and errors in the
/// error envelope.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &MergeOutcome) -> String {
        serde_json::to_string(&SuccessEnvelope::new(outcome)).unwrap_or_else(|_| {
            json!({ "status": "error", "message": "Failed to serialize outcome" }).to_string()
        })
    }

    fn format_error(&self, error: &CliError) -> String {
        serde_json::to_string(&ErrorEnvelope::from_error(error)).unwrap_or_else(|_| {
            json!({ "status": "error", "message": error.to_string() }).to_string()
        })
    }
}

/// Plain text output formatter.
///
/// Prints one status line per run, with paths shown relative to the project
/// root when they live under it.
pub struct PlainFormatter {
    use_color: bool,
    root: PathBuf,
}

impl PlainFormatter {
    /// Creates a new plain formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `root` - Project root used to shorten displayed paths
    pub fn new(use_color: bool, root: impl Into<PathBuf>) -> Self {
        Self {
            use_color,
            root: root.into(),
        }
    }

    fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn buffer(&self) -> Buffer {
        if self.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        }
    }

    fn status_line(&self, label: &str, color: Color, rest: &str) -> String {
        let mut buf = self.buffer();
        let _ = buf.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buf, "{label}");
        let _ = buf.reset();
        let _ = write!(buf, "{rest}");
        String::from_utf8_lossy(buf.as_slice()).into_owned()
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_outcome(&self, outcome: &MergeOutcome) -> String {
        match outcome {
            MergeOutcome::NoInputs => "No input files found; nothing to merge.".to_string(),
            MergeOutcome::UpToDate { output } => {
                self.status_line("Up to date", Color::Cyan, &format!(": {}", self.display(output)))
            }
            MergeOutcome::NoContentChange { output } => {
                self.status_line("No changes", Color::Cyan, &format!(": {}", self.display(output)))
            }
            MergeOutcome::DryRun { output, preview } => {
                let header = self.status_line(
                    "Dry run",
                    Color::Yellow,
                    &format!(": would write {}", self.display(output)),
                );
                format!("{header}\n{preview}")
            }
            MergeOutcome::Wrote { output } => {
                self.status_line("Wrote", Color::Green, &format!(" {}", self.display(output)))
            }
            MergeOutcome::WroteWithBackup { output, backup } => self.status_line(
                "Wrote",
                Color::Green,
                &format!(
                    " {} (backup: {})",
                    self.display(output),
                    self.display(backup)
                ),
            ),
        }
    }

    fn format_error(&self, error: &CliError) -> String {
        self.status_line("Error", Color::Red, &format!(": {error}"))
    }
}

/// Creates a formatter for the requested output mode.
///
/// # Arguments
/// * `json` - Emit JSON envelopes instead of plain lines
/// * `use_color` - Whether plain output may use color
/// * `root` - Project root used to shorten displayed paths
///
/// # Returns
/// A boxed formatter
pub fn create_formatter(json: bool, use_color: bool, root: &Path) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(PlainFormatter::new(use_color, root))
    }
}
