//! Core types shared across the store, watcher and manager.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// File extension that marks a file in the watched directory as a reminder.
pub const REMINDER_EXTENSION: &str = "rem";

/// Identifier of a reminder: the file name (including the `.rem`
/// extension) within the watched directory. Opaque beyond that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReminderId(String);

impl ReminderId {
    /// Build an id from a path, returning `None` for anything that is not
    /// a `.rem` entry (editor swap files and the like are ignored here).
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.extension().and_then(|e| e.to_str()) != Some(REMINDER_EXTENSION) {
            return None;
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| ReminderId(n.to_string()))
    }

    /// Build an id from a bare file name, appending `.rem` if missing.
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(&format!(".{}", REMINDER_EXTENSION)) {
            ReminderId(name.to_string())
        } else {
            ReminderId(format!("{}.{}", name, REMINDER_EXTENSION))
        }
    }

    /// The file name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory state for one reminder with an associated window.
#[derive(Clone, Debug)]
pub struct Reminder {
    pub id: ReminderId,
    /// Body text, mirroring the file content (last write observed wins).
    pub text: String,
    /// Whether the window is currently shown (false while snoozed).
    pub visible: bool,
    /// When the snooze interval ends, if snoozed.
    pub snoozed_until: Option<DateTime<Utc>>,
}

impl Reminder {
    pub fn new(id: ReminderId, text: String) -> Self {
        Self {
            id,
            text,
            visible: true,
            snoozed_until: None,
        }
    }
}

/// Filesystem event reported by the directory watcher.
///
/// On startup the watcher emits a synthetic `Created` for every existing
/// `.rem` file so windows are restored after a restart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReminderEvent {
    Created(PathBuf),
    Modified(PathBuf),
    Deleted(PathBuf),
}

/// Effect the manager asks the GUI host to carry out.
///
/// The manager itself never touches a window; it returns these so its
/// behavior can be unit tested without a GUI or display server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Open a new window showing `text`.
    Open { id: ReminderId, text: String },
    /// Replace the displayed text of an open window.
    SetText { id: ReminderId, text: String },
    /// Hide the window (snooze started).
    Hide(ReminderId),
    /// Re-show a hidden window (snooze elapsed).
    Show(ReminderId),
    /// Close and forget the window.
    Close(ReminderId),
    /// The reminder set went from non-empty to empty: exit the process.
    Shutdown,
}
