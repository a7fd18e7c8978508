//! Remind Windows Core Library
//!
//! Reminders as files: each `*.rem` entry in a watched directory is one
//! reminder, its content is the reminder text, and its presence is the
//! only persisted state. The desktop app opens one window per reminder
//! and exits when the file set empties.
//!
//! ## Pieces
//!
//! - [`ReminderStore`]: the watched directory (create/list/read/delete,
//!   filename derivation from reminder text)
//! - [`DirWatcher`]: notify-based watch that feeds [`ReminderEvent`]s
//!   into a tokio channel, replaying existing files on startup
//! - [`ReminderManager`]: the id → window-state map; turns events and
//!   user actions into [`Action`]s for the GUI host
//! - [`InstanceLock`]: single-instance lock file
//!
//! ## Quick Start
//!
//! ```ignore
//! use remind_core::{ReminderManager, ReminderStore};
//!
//! let store = ReminderStore::open(ReminderStore::default_dir())?;
//! let id = store.add("Water the plants")?;
//! let mut manager = ReminderManager::new(store.clone());
//! for action in manager.handle_event(remind_core::ReminderEvent::Created(store.path_of(&id))) {
//!     // hand to the window host
//! }
//! # Ok::<(), remind_core::RemindError>(())
//! ```

pub mod error;
pub mod lock;
pub mod manager;
pub mod store;
pub mod types;
pub mod watcher;

// Re-exports
pub use error::RemindError;
pub use lock::InstanceLock;
pub use manager::ReminderManager;
pub use store::ReminderStore;
pub use types::{Action, Reminder, ReminderEvent, ReminderId, REMINDER_EXTENSION};
pub use watcher::DirWatcher;
