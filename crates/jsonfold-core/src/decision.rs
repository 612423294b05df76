// Rust guideline compliant 2026-10-16

//! Merge orchestration and the skip / preview / commit decision.
//!
//! One call to [`merge_files`] runs a fixed sequence:
//! 1. Resolve inputs (missing ones dropped only with `skip_missing`)
//! 2. Stop with [`MergeOutcome::NoInputs`] if none remain
//! 3. Resolve the output path
//! 4. Parse and fold the inputs
//! 5. Render with the resolved indent
//! 6. Stop with [`MergeOutcome::NoContentChange`] if the output already holds that text
//! 7. Stop with [`MergeOutcome::UpToDate`] if the output is a regular file at least
//!    as new as every input (skipped for dry runs)
//! 8. Stop with [`MergeOutcome::DryRun`] carrying the preview
//! 9. Commit, with a backup when requested
//!
//! The content check runs before the timestamp check.

use crate::format::parse;
use crate::merge::{merge_values, ArrayStrategy};
use crate::path_guard::PathGuard;
use crate::safe_io::{commit, modified_millis, read_text};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::path::PathBuf;

/// Options for one merge run, supplied whole by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Input paths in precedence order; later entries override earlier ones.
    pub inputs: Vec<String>,
    /// Output path.
    pub output: String,
    /// Drop missing inputs instead of failing.
    pub skip_missing: bool,
    /// Pretty-print with two spaces when no explicit indent is given.
    pub pretty: bool,
    /// Compute and report without writing anything.
    pub dry_run: bool,
    /// Copy the previous output to `<output>.bak` before overwriting it.
    pub backup: bool,
    /// Explicit indent width; wins over `pretty`.
    pub indent: Option<usize>,
    /// Array combination policy.
    pub array_strategy: ArrayStrategy,
}

impl MergeOptions {
    /// Creates options with the default flags for the given paths.
    pub fn new(inputs: Vec<String>, output: impl Into<String>) -> Self {
        Self {
            inputs,
            output: output.into(),
            skip_missing: false,
            pretty: true,
            dry_run: false,
            backup: false,
            indent: None,
            array_strategy: ArrayStrategy::Replace,
        }
    }

    /// Indent width: explicit `indent`, else 2 when pretty, else 0.
    pub fn resolved_indent(&self) -> usize {
        match self.indent {
            Some(indent) => indent,
            None if self.pretty => 2,
            None => 0,
        }
    }
}

/// The terminal outcome of a merge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MergeOutcome {
    /// No inputs were left after resolution.
    NoInputs,
    /// The output is at least as new as every input.
    UpToDate {
        /// Resolved output path.
        output: PathBuf,
    },
    /// The output already holds exactly the merged text.
    NoContentChange {
        /// Resolved output path.
        output: PathBuf,
    },
    /// Dry run; nothing was written.
    DryRun {
        /// Resolved output path.
        output: PathBuf,
        /// Text that would have been written.
        preview: String,
    },
    /// The output was written.
    Wrote {
        /// Resolved output path.
        output: PathBuf,
    },
    /// The output was written after backing up its previous content.
    WroteWithBackup {
        /// Resolved output path.
        output: PathBuf,
        /// Backup path.
        backup: PathBuf,
    },
}

impl MergeOutcome {
    /// Returns true if the output file was (re)written.
    pub fn wrote(&self) -> bool {
        matches!(
            self,
            MergeOutcome::Wrote { .. } | MergeOutcome::WroteWithBackup { .. }
        )
    }
}

/// Merges the configured inputs into the output file.
///
/// # Errors
///
/// The first failure aborts the run: an unsafe or unsupported path, a
/// missing required input, an oversized or unreadable file, malformed
/// content, or a failed commit.
pub fn merge_files(guard: &PathGuard, options: &MergeOptions) -> Result<MergeOutcome> {
    let mut inputs = Vec::with_capacity(options.inputs.len());
    for input in &options.inputs {
        if let Some(path) = guard.resolve_input_path(input, options.skip_missing)? {
            inputs.push(path);
        }
    }

    if inputs.is_empty() {
        tracing::debug!("no inputs to merge");
        return Ok(MergeOutcome::NoInputs);
    }

    let output = guard.resolve_output_path(&options.output)?;

    let mut values = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let text = read_text(input)?;
        values.push(parse(input, &text)?);
    }
    let merged = merge_values(values, options.array_strategy);
    let rendered = render(&merged, options.resolved_indent())?;

    if output.is_file() && read_text(&output)? == rendered {
        tracing::debug!(output = %output.display(), "content unchanged");
        return Ok(MergeOutcome::NoContentChange { output });
    }

    if !options.dry_run {
        let output_mtime = modified_millis(Some(output.as_path()).filter(|p| p.is_file()));
        let newest_input = inputs
            .iter()
            .map(|p| modified_millis(Some(p.as_path())))
            .max()
            .flatten();
        tracing::debug!(?output_mtime, ?newest_input, "comparing modification times");
        if output_mtime.is_some() && output_mtime >= newest_input {
            return Ok(MergeOutcome::UpToDate { output });
        }
    }

    if options.dry_run {
        tracing::debug!(output = %output.display(), "dry run, not writing");
        return Ok(MergeOutcome::DryRun {
            output,
            preview: rendered,
        });
    }

    let outcome = match commit(&output, &rendered, options.backup)? {
        Some(backup) => MergeOutcome::WroteWithBackup { output, backup },
        None => MergeOutcome::Wrote { output },
    };
    tracing::debug!(?outcome, "committed merge");
    Ok(outcome)
}

/// Serializes `value` with `indent` spaces per level, or minified for 0.
///
/// # Errors
///
/// Returns a serialization error if the value cannot be written as JSON.
pub fn render(value: &Value, indent: usize) -> Result<String> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }

    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
