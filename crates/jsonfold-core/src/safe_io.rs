// Rust guideline compliant 2026-10-16

//! Bounded reads and atomic commits.
//!
//! Output files are replaced with a temp-file-plus-rename so readers never
//! observe a partially written file.

use crate::{Error, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Largest file that will be read, in bytes (100 MiB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

const MIB: u64 = 1024 * 1024;

/// Reads a whole file as UTF-8 text, refusing files over [`MAX_FILE_SIZE`].
///
/// # Errors
///
/// Returns [`Error::FileTooLarge`] for oversized files and [`Error::Io`] for
/// stat, read or decoding failures.
pub fn read_text(path: &Path) -> Result<String> {
    let size = fs::metadata(path).map_err(|e| Error::io(path, e))?.len();
    if size > MAX_FILE_SIZE {
        return Err(Error::FileTooLarge {
            path: path.to_path_buf(),
            size_mib: size as f64 / MIB as f64,
            limit_mib: MAX_FILE_SIZE / MIB,
        });
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Returns the last-modified time in milliseconds since the Unix epoch.
///
/// `None` stands for "infinitely old": it is returned for a missing path or
/// no path at all, and compares below every `Some` value.
pub fn modified_millis(path: Option<&Path>) -> Option<u128> {
    let modified = fs::metadata(path?).ok()?.modified().ok()?;
    Some(
        modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0),
    )
}

/// Returns `<output>.bak`, the backup location for `output`.
pub fn backup_path_for(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}

/// Atomically replaces `output` with `text`.
///
/// When `make_backup` is set and `output` already exists, its current bytes
/// are copied to `<output>.bak` first, replacing any earlier backup.
///
/// # Returns
///
/// The backup path if one was written.
///
/// # Errors
///
/// Returns [`Error::Io`] if the backup, the temp write or the rename fails.
/// On failure the temp file is removed and `output` is left untouched.
pub fn commit(output: &Path, text: &str, make_backup: bool) -> Result<Option<PathBuf>> {
    let backup = if make_backup && output.is_file() {
        let backup = backup_path_for(output);
        fs::copy(output, &backup).map_err(|e| Error::io(&backup, e))?;
        tracing::debug!(backup = %backup.display(), "wrote backup");
        Some(backup)
    } else {
        None
    };

    let temp_path = temp_path_for(output);
    if let Err(e) = write_synced(&temp_path, text) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, output) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(output, e));
    }

    Ok(backup)
}

fn write_synced(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()
}

// Sibling of the output so the rename never crosses filesystems.
fn temp_path_for(output: &Path) -> PathBuf {
    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}
