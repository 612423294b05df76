// Rust guideline compliant 2026-10-16

//! Advisory locking around a merge.

use crate::error::{CliError, Result};
use fs2::FileExt;
use jsonfold_core::Error as CoreError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Returns the lock file used for `output`: the output path with `.lock` appended.
#[must_use]
pub fn lock_path_for(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".lock");
    PathBuf::from(name)
}

/// Runs `f` while holding an exclusive lock on `<output>.lock`.
///
/// The lock is taken without waiting; a lock held by another process fails
/// immediately. The lock file is left in place afterwards.
///
/// # Errors
///
/// Returns an IO error if the lock file cannot be opened,
/// [`CliError::Locked`] if another holder has the lock, otherwise whatever
/// `f` returns.
pub fn with_output_lock<F, T>(output: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let path = lock_path_for(output);
    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)
        .map_err(|source| CoreError::io(&path, source))?;

    lock_file
        .try_lock_exclusive()
        .map_err(|source| CliError::Locked {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(lock = %path.display(), "acquired output lock");

    let result = f();

    let _ = lock_file.unlock();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lock_path_appends_suffix() {
        assert_eq!(
            lock_path_for(Path::new("/p/out.json")),
            PathBuf::from("/p/out.json.lock")
        );
    }

    #[test]
    fn test_with_output_lock_runs_closure() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let value = with_output_lock(&output, || Ok(42)).unwrap();
        assert_eq!(value, 42);
        assert!(lock_path_for(&output).exists());
    }

    #[test]
    fn test_with_output_lock_fails_when_held() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let holder = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(lock_path_for(&output))
            .unwrap();
        holder.try_lock_exclusive().unwrap();

        let result = with_output_lock(&output, || Ok(()));
        assert!(matches!(result, Err(CliError::Locked { .. })));

        holder.unlock().unwrap();
        assert!(with_output_lock(&output, || Ok(())).is_ok());
    }

    #[test]
    fn test_with_output_lock_unopenable_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing-dir").join("out.json");

        let result = with_output_lock(&output, || Ok(()));
        assert!(matches!(
            result,
            Err(CliError::Core(CoreError::Io { .. }))
        ));
    }

    #[test]
    fn test_with_output_lock_propagates_closure_error() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let result: Result<()> =
            with_output_lock(&output, || Err(CliError::Config("boom".to_string())));
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(with_output_lock(&output, || Ok(())).is_ok());
    }
}
