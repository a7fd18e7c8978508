//! The watched directory holding `.rem` reminder files.
//!
//! The file set *is* the persistent state: each `*.rem` entry is one
//! reminder, its content is the reminder text, and its name is the
//! reminder's identifier. There is no separate database or index.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::RemindError;
use crate::types::{ReminderId, REMINDER_EXTENSION};

/// Maximum length of a filename derived from reminder text, not
/// counting the extension.
const SLUG_MAX_LEN: usize = 20;

/// Digits appended to deduplicate a taken filename.
const COUNTER_WIDTH: usize = 3;

/// Handle on the watched reminder directory.
#[derive(Clone, Debug)]
pub struct ReminderStore {
    dir: PathBuf,
}

impl ReminderStore {
    /// Open the store, creating the directory if it does not exist.
    ///
    /// Fails with [`RemindError::NotADirectory`] if the reserved path
    /// exists as a regular file. This is a fatal startup condition.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, RemindError> {
        let dir = dir.into();
        if dir.exists() {
            if !dir.is_dir() {
                return Err(RemindError::NotADirectory(dir));
            }
        } else {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    /// Default watched directory: `~/.remindwindows`.
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".remindwindows")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute path of a reminder file.
    pub fn path_of(&self, id: &ReminderId) -> PathBuf {
        self.dir.join(id.as_str())
    }

    /// Derive a filename stem from reminder text: alphanumeric characters
    /// only, truncated to [`SLUG_MAX_LEN`]. Text with no alphanumeric
    /// characters at all falls back to a digest of the original text.
    pub fn slug_for_text(text: &str) -> String {
        let slug: String = text
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(SLUG_MAX_LEN)
            .collect();
        if !slug.is_empty() {
            return slug;
        }
        let digest = Sha256::digest(text.as_bytes());
        hex::encode(digest)[..SLUG_MAX_LEN].to_string()
    }

    /// First free path for `slug`, appending a zero-padded counter to the
    /// truncated stem when the plain name is already taken.
    fn unique_path(&self, slug: &str) -> PathBuf {
        let mut path = self.dir.join(format!("{}.{}", slug, REMINDER_EXTENSION));
        let stem: String = slug.chars().take(SLUG_MAX_LEN - COUNTER_WIDTH).collect();
        let mut counter = 0usize;
        while path.exists() {
            let name = format!(
                "{}{:0width$}.{}",
                stem,
                counter,
                REMINDER_EXTENSION,
                width = COUNTER_WIDTH
            );
            path = self.dir.join(name);
            counter += 1;
        }
        path
    }

    /// Create a reminder file for `text`, deriving the filename from the
    /// text itself. Returns the new reminder's id.
    pub fn add(&self, text: &str) -> Result<ReminderId, RemindError> {
        let path = self.unique_path(&Self::slug_for_text(text));
        fs::write(&path, text)?;
        // unique_path only yields .rem names
        Ok(ReminderId::from_path(&path).unwrap())
    }

    /// Create a reminder file under an explicit name. Refuses to clobber
    /// an existing reminder unless `force` is set.
    pub fn add_named(
        &self,
        text: &str,
        name: &str,
        force: bool,
    ) -> Result<ReminderId, RemindError> {
        let id = ReminderId::from_name(name);
        let path = self.path_of(&id);
        if path.exists() && !force {
            return Err(RemindError::NameTaken(id.to_string()));
        }
        fs::write(&path, text)?;
        Ok(id)
    }

    /// All reminder ids in the store, sorted alphabetically.
    pub fn list(&self) -> Result<Vec<ReminderId>, RemindError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if let Some(id) = ReminderId::from_path(&entry.path()) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Read a reminder's text.
    pub fn read(&self, id: &ReminderId) -> Result<String, RemindError> {
        Ok(fs::read_to_string(self.path_of(id))?)
    }

    /// Delete a reminder file. The watcher observes the removal and the
    /// manager closes the window through the normal deleted path.
    pub fn delete(&self, id: &ReminderId) -> Result<(), RemindError> {
        Ok(fs::remove_file(self.path_of(id))?)
    }

    /// Resolve a CLI-style reference to an existing reminder. Accepts an
    /// index into the sorted list (`"0"`), a full file name
    /// (`"buymilk.rem"`), or a bare name (`"buymilk"`).
    pub fn resolve(&self, reference: &str) -> Result<ReminderId, RemindError> {
        let id = if reference.chars().all(|c| c.is_ascii_digit()) && !reference.is_empty() {
            let index: usize = reference
                .parse()
                .map_err(|_| RemindError::NotFound(reference.to_string()))?;
            let ids = self.list()?;
            ids.into_iter()
                .nth(index)
                .ok_or(RemindError::IndexOutOfRange(index))?
        } else {
            ReminderId::from_name(reference)
        };
        if !self.path_of(&id).exists() {
            return Err(RemindError::NotFound(id.to_string()));
        }
        Ok(id)
    }
}
