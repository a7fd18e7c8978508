//! Error types for remind-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for reminder operations
#[derive(Error, Debug)]
pub enum RemindError {
    /// The reserved reminder directory exists but is not a directory
    #[error("reserved path {0} exists and is not a directory")]
    NotADirectory(PathBuf),

    /// Another instance already holds the lock file
    #[error("already running (lock file {0} exists)")]
    AlreadyRunning(PathBuf),

    /// A reminder file with this name already exists
    #[error("{0} is already a reminder file")]
    NameTaken(String),

    /// No reminder file matches the given name or index
    #[error("{0} is not a reminder file")]
    NotFound(String),

    /// A numeric reminder reference is past the end of the list
    #[error("reminder index {0} out of range")]
    IndexOutOfRange(usize),

    /// Filesystem watcher error (startup failures are fatal)
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
