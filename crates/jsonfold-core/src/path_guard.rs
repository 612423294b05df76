// Rust guideline compliant 2026-10-16

//! Path validation against a fixed project root.
//!
//! Every path the merge touches goes through a [`PathGuard`] first. Syntax
//! checks run before any filesystem access, so nothing is stat'ed for a path
//! that is going to be rejected anyway.

use crate::format::{allowed_extensions, Format};
use crate::{Error, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Confines file access to a project root and the recognized extensions.
#[derive(Debug, Clone)]
pub struct PathGuard {
    /// Absolute, symlink-resolved project root.
    root: PathBuf,
}

impl PathGuard {
    /// Creates a guard rooted at `root`.
    ///
    /// The root is resolved through symlinks once, here.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the root does not exist or cannot be resolved.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = dunce::canonicalize(root).map_err(|e| Error::io(root, e))?;
        Ok(Self { root })
    }

    /// Returns the resolved project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `path` against the root and checks that it stays inside it.
    ///
    /// Existing targets are resolved through symlinks to their real path;
    /// targets that do not exist yet are normalized lexically.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPath`] if a segment has disallowed characters
    /// - [`Error::PathEscape`] if the resolved path is outside the root
    /// - [`Error::Io`] if an existing target cannot be resolved
    pub fn ensure_inside_root(&self, path: &str) -> Result<PathBuf> {
        validate_segments(path)?;

        let joined = self.root.join(path);
        let resolved = self.resolve(&joined)?;
        if resolved.strip_prefix(&self.root).is_err() {
            return Err(Error::PathEscape {
                path: path.to_string(),
            });
        }
        Ok(resolved)
    }

    /// Resolves an input path and requires it to be an existing regular file.
    ///
    /// Returns `Ok(None)` for a missing file when `optional` is set.
    ///
    /// # Errors
    ///
    /// Any error from [`validate_segments`], [`ensure_extension_allowed`] or
    /// [`PathGuard::ensure_inside_root`], and [`Error::FileNotFound`] for a
    /// missing required input.
    pub fn resolve_input_path(&self, path: &str, optional: bool) -> Result<Option<PathBuf>> {
        validate_segments(path)?;
        ensure_extension_allowed(path)?;
        let resolved = self.ensure_inside_root(path)?;

        let is_file = match std::fs::metadata(&resolved) {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => return Err(Error::io(&resolved, e)),
        };

        if is_file {
            tracing::debug!(input = %resolved.display(), "resolved input");
            return Ok(Some(resolved));
        }
        if optional {
            tracing::debug!(input = path, "skipping missing optional input");
            return Ok(None);
        }
        Err(Error::FileNotFound { path: resolved })
    }

    /// Resolves the output path. The file itself need not exist, but both it
    /// and its parent directory must resolve inside the root.
    ///
    /// # Errors
    ///
    /// Same as [`PathGuard::ensure_inside_root`], plus
    /// [`Error::UnsupportedExtension`].
    pub fn resolve_output_path(&self, path: &str) -> Result<PathBuf> {
        ensure_extension_allowed(path)?;
        let resolved = self.ensure_inside_root(path)?;

        let escape = || Error::PathEscape {
            path: path.to_string(),
        };
        let parent = resolved.parent().ok_or_else(escape)?;
        let parent = self.resolve(parent)?;
        if parent.strip_prefix(&self.root).is_err() {
            return Err(escape());
        }

        tracing::debug!(output = %resolved.display(), "resolved output");
        Ok(resolved)
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if path.exists() {
            dunce::canonicalize(path).map_err(|e| Error::io(path, e))
        } else {
            Ok(normalize_lexically(path))
        }
    }
}

/// Checks that every segment of `path` is made of `[A-Za-z0-9._-]`.
///
/// Both `/` and `\` separate segments. Empty, `.` and `..` segments are
/// accepted here; whether they leave the root is decided later.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] naming the first offending segment.
pub fn validate_segments(path: &str) -> Result<()> {
    let bad = path
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .find(|s| !s.chars().all(is_safe_char));

    match bad {
        Some(segment) => Err(Error::InvalidPath {
            path: path.to_string(),
            segment: segment.to_string(),
        }),
        None => Ok(()),
    }
}

/// Checks that the extension of `path` is one of the supported formats.
///
/// # Errors
///
/// Returns [`Error::UnsupportedExtension`] otherwise.
pub fn ensure_extension_allowed(path: &str) -> Result<()> {
    if Format::from_path(Path::new(path)).is_some() {
        return Ok(());
    }
    Err(Error::UnsupportedExtension {
        path: path.to_string(),
        expected: allowed_extensions(),
    })
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
