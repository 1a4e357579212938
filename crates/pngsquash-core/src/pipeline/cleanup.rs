//! Temporary file removal.

use std::io;
use std::path::{Path, PathBuf};

/// Remove `path` if it exists.
///
/// Returns `Ok(true)` when a file was removed and `Ok(false)` when there was
/// nothing to remove.
pub fn remove_if_present(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Scoped owner of a temporary file path.
///
/// Call [`TemporaryFile::remove`] to delete the file and observe the result.
/// If the guard is dropped without that call the file is still removed, with
/// errors only logged.
#[derive(Debug)]
pub struct TemporaryFile {
    path: PathBuf,
    armed: bool,
}

impl TemporaryFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now, reporting whether anything was removed.
    pub fn remove(mut self) -> io::Result<bool> {
        self.armed = false;
        remove_if_present(&self.path)
    }
}

impl Drop for TemporaryFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = remove_if_present(&self.path) {
            tracing::warn!("Failed to remove temporary file {:?}: {}", self.path, e);
        }
    }
}
