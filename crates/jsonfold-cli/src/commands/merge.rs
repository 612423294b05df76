// Rust guideline compliant 2026-10-16

//! The merge command: configuration in, outcome out.

use crate::config::Config;
use crate::error::Result;
use crate::lock::with_output_lock;
use jsonfold_core::{merge_files, MergeOptions, MergeOutcome, PathGuard};
use std::path::{Path, PathBuf};

/// Runs one merge under `root` with the resolved configuration.
///
/// # Arguments
///
/// * `config` - Validated configuration
/// * `root` - Project root every path is confined to
///
/// # Returns
///
/// The outcome reported by the core.
///
/// # Errors
///
/// Returns an error if:
/// - The root cannot be resolved
/// - The output lock is held elsewhere (with `lock` enabled)
/// - The lock file cannot be opened
/// - The merge itself fails
pub fn execute(config: &Config, root: &Path) -> Result<MergeOutcome> {
    let guard = PathGuard::new(root)?;
    let options = config.to_merge_options();

    let target = if config.lock {
        lock_target(&guard, &options)
    } else {
        None
    };

    match target {
        Some(output) => with_output_lock(&output, || Ok(merge_files(&guard, &options)?)),
        None => Ok(merge_files(&guard, &options)?),
    }
}

/// Returns the output path to lock, or `None` when the run cannot reach a
/// write: dry runs, runs the merge will reject or report as `NoInputs`, and
/// outputs whose directory does not exist.
fn lock_target(guard: &PathGuard, options: &MergeOptions) -> Option<PathBuf> {
    if options.dry_run {
        return None;
    }

    let mut any_input = false;
    for input in &options.inputs {
        match guard.resolve_input_path(input, options.skip_missing) {
            Ok(Some(_)) => any_input = true,
            Ok(None) => {}
            Err(_) => return None,
        }
    }
    if !any_input {
        return None;
    }

    let output = guard.resolve_output_path(&options.output).ok()?;
    output.parent().filter(|dir| dir.is_dir())?;
    Some(output)
}
