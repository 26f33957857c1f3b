use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// RAII guard for an intermediate file.
///
/// The file is removed when the guard drops, whether the surrounding
/// operation succeeded or returned early with an error.
pub struct TempFile<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
}

impl<'a, R: Runtime> TempFile<'a, R> {
    /// Take ownership of `path`. The file does not need to exist yet.
    pub fn new(runtime: &'a R, path: PathBuf) -> Self {
        debug!("Tracking temporary file {:?}", path);
        Self { runtime, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Runtime> Drop for TempFile<'_, R> {
    fn drop(&mut self) {
        if !self.runtime.exists(&self.path) {
            return;
        }
        debug!("Cleaning up: {:?}", self.path);
        if let Err(e) = self.runtime.remove_file(&self.path) {
            warn!("Failed to remove temporary file {:?}: {:#}", self.path, e);
        }
    }
}
