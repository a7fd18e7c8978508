//! Single-instance lock file.
//!
//! Acquired once at startup and held for the process lifetime. There is
//! no contention-retry logic: if the file already exists, another
//! instance is assumed to be running and startup fails.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::RemindError;

pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    /// Default lock location: `remindwindows.lock` in the system temp dir.
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join("remindwindows.lock")
    }

    /// Create the lock file, failing with [`RemindError::AlreadyRunning`]
    /// if it already exists. The file records this process's pid.
    pub fn acquire(path: impl Into<PathBuf>) -> Result<Self, RemindError> {
        let path = path.into();
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                let _ = write!(file, "{}", std::process::id());
                Ok(Self { path })
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(RemindError::AlreadyRunning(path))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("failed to remove lock file {:?}: {}", self.path, e);
        }
    }
}
