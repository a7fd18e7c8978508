//! In-memory reminder state and the event handler driving the windows.
//!
//! The manager owns the id → reminder map and is the single place where
//! watcher events and user actions meet. It is a pure state machine: every
//! operation returns the [`Action`]s the GUI host must carry out, so the
//! whole lifecycle can be unit tested without a display server.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use chrono::Utc;

use crate::error::RemindError;
use crate::store::ReminderStore;
use crate::types::{Action, Reminder, ReminderEvent, ReminderId};

pub struct ReminderManager {
    store: ReminderStore,
    reminders: BTreeMap<ReminderId, Reminder>,
}

impl ReminderManager {
    pub fn new(store: ReminderStore) -> Self {
        Self {
            store,
            reminders: BTreeMap::new(),
        }
    }

    /// Dispatch one watcher event.
    pub fn handle_event(&mut self, event: ReminderEvent) -> Vec<Action> {
        match event {
            ReminderEvent::Created(path) => self.on_created(&path),
            ReminderEvent::Modified(path) => self.on_modified(&path),
            ReminderEvent::Deleted(path) => self.on_deleted(&path),
        }
    }

    fn on_created(&mut self, path: &Path) -> Vec<Action> {
        let Some(id) = ReminderId::from_path(path) else {
            return Vec::new();
        };
        if self.reminders.contains_key(&id) {
            // Watch-then-scan startup can report a file twice; a repeated
            // create is just a content refresh.
            return self.on_modified(path);
        }
        let text = match self.store.read(&id) {
            Ok(text) => text,
            Err(e) => {
                // Non-fatal: skip this file, no window, no retry.
                tracing::warn!("skipping unreadable reminder {}: {}", id, e);
                return Vec::new();
            }
        };
        self.reminders.insert(id.clone(), Reminder::new(id.clone(), text.clone()));
        tracing::debug!("opened reminder {}", id);
        vec![Action::Open { id, text }]
    }

    fn on_modified(&mut self, path: &Path) -> Vec<Action> {
        let Some(id) = ReminderId::from_path(path) else {
            return Vec::new();
        };
        if !self.reminders.contains_key(&id) {
            return self.on_created(path);
        }
        // Re-read on every event so the last write always wins, however
        // the create/modify events were interleaved.
        let text = match self.store.read(&id) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("reminder {} became unreadable: {}", id, e);
                return Vec::new();
            }
        };
        if let Some(reminder) = self.reminders.get_mut(&id) {
            reminder.text = text.clone();
        }
        vec![Action::SetText { id, text }]
    }

    fn on_deleted(&mut self, path: &Path) -> Vec<Action> {
        let Some(id) = ReminderId::from_path(path) else {
            return Vec::new();
        };
        if self.reminders.remove(&id).is_none() {
            return Vec::new();
        }
        tracing::debug!("closed reminder {}", id);
        let mut actions = vec![Action::Close(id)];
        if self.reminders.is_empty() {
            // The set went non-empty -> empty: the process is done.
            actions.push(Action::Shutdown);
        }
        actions
    }

    /// Hide a reminder's window for `duration`. The backing file stays on
    /// disk; the caller schedules a timer that feeds [`Self::snooze_elapsed`].
    pub fn snooze(&mut self, id: &ReminderId, duration: Duration) -> Vec<Action> {
        let Some(reminder) = self.reminders.get_mut(id) else {
            return Vec::new();
        };
        if !reminder.visible {
            return Vec::new();
        }
        reminder.visible = false;
        reminder.snoozed_until = Utc::now().checked_add_signed(
            chrono::Duration::from_std(duration).unwrap_or_else(|_| chrono::Duration::zero()),
        );
        tracing::debug!("snoozed reminder {} for {:?}", id, duration);
        vec![Action::Hide(id.clone())]
    }

    /// Re-show a snoozed window. No-op if the reminder was deleted or
    /// dismissed while hidden.
    pub fn snooze_elapsed(&mut self, id: &ReminderId) -> Vec<Action> {
        let Some(reminder) = self.reminders.get_mut(id) else {
            return Vec::new();
        };
        if reminder.visible {
            return Vec::new();
        }
        reminder.visible = true;
        reminder.snoozed_until = None;
        vec![Action::Show(id.clone())]
    }

    /// Permanently remove a reminder by deleting its backing file. The
    /// watcher observes the removal and routes it through the normal
    /// deleted path, so no window bookkeeping happens here.
    pub fn dismiss(&self, id: &ReminderId) -> Result<(), RemindError> {
        self.store.delete(id)
    }

    pub fn get(&self, id: &ReminderId) -> Option<&Reminder> {
        self.reminders.get(id)
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ReminderStore, ReminderManager) {
        let tmp = TempDir::new().unwrap();
        let store = ReminderStore::open(tmp.path().join("reminders")).unwrap();
        let manager = ReminderManager::new(store.clone());
        (tmp, store, manager)
    }

    #[test]
    fn test_created_opens_window() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("Buy milk").unwrap();

        let actions = manager.handle_event(ReminderEvent::Created(store.path_of(&id)));
        assert_eq!(
            actions,
            vec![Action::Open {
                id: id.clone(),
                text: "Buy milk".into()
            }]
        );
        assert_eq!(manager.len(), 1);
        assert!(manager.get(&id).unwrap().visible);
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let (_tmp, store, mut manager) = setup();
        let path = store.dir().join("ghost.rem");

        // Created event for a file that never existed
        let actions = manager.handle_event(ReminderEvent::Created(path));
        assert!(actions.is_empty());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_repeated_create_refreshes_instead_of_duplicating() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("first").unwrap();
        let path = store.path_of(&id);

        manager.handle_event(ReminderEvent::Created(path.clone()));
        std::fs::write(&path, "second").unwrap();
        let actions = manager.handle_event(ReminderEvent::Created(path));

        assert_eq!(
            actions,
            vec![Action::SetText {
                id: id.clone(),
                text: "second".into()
            }]
        );
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_modified_updates_text_in_place() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("before").unwrap();
        let path = store.path_of(&id);
        manager.handle_event(ReminderEvent::Created(path.clone()));

        std::fs::write(&path, "after").unwrap();
        let actions = manager.handle_event(ReminderEvent::Modified(path));

        assert_eq!(
            actions,
            vec![Action::SetText {
                id: id.clone(),
                text: "after".into()
            }]
        );
        assert_eq!(manager.get(&id).unwrap().text, "after");
    }

    #[test]
    fn test_modified_unknown_id_is_treated_as_created() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("late arrival").unwrap();

        let actions = manager.handle_event(ReminderEvent::Modified(store.path_of(&id)));
        assert_eq!(
            actions,
            vec![Action::Open {
                id,
                text: "late arrival".into()
            }]
        );
    }

    #[test]
    fn test_deleted_closes_window() {
        let (_tmp, store, mut manager) = setup();
        let a = store.add("alpha").unwrap();
        let b = store.add("bravo").unwrap();
        manager.handle_event(ReminderEvent::Created(store.path_of(&a)));
        manager.handle_event(ReminderEvent::Created(store.path_of(&b)));

        store.delete(&a).unwrap();
        let actions = manager.handle_event(ReminderEvent::Deleted(store.path_of(&a)));

        // Still one reminder left, so no shutdown yet
        assert_eq!(actions, vec![Action::Close(a)]);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_last_delete_shuts_down() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("last one").unwrap();
        manager.handle_event(ReminderEvent::Created(store.path_of(&id)));

        store.delete(&id).unwrap();
        let actions = manager.handle_event(ReminderEvent::Deleted(store.path_of(&id)));
        assert_eq!(actions, vec![Action::Close(id), Action::Shutdown]);
    }

    #[test]
    fn test_delete_of_unknown_reminder_is_ignored() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("only").unwrap();
        manager.handle_event(ReminderEvent::Created(store.path_of(&id)));

        // A non-tracked path being deleted must not trigger shutdown
        let stray = store.dir().join("stray.rem");
        let actions = manager.handle_event(ReminderEvent::Deleted(stray));
        assert!(actions.is_empty());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_snooze_hides_but_keeps_file() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("later").unwrap();
        manager.handle_event(ReminderEvent::Created(store.path_of(&id)));

        let actions = manager.snooze(&id, Duration::from_secs(60));
        assert_eq!(actions, vec![Action::Hide(id.clone())]);
        assert!(store.path_of(&id).exists());

        let reminder = manager.get(&id).unwrap();
        assert!(!reminder.visible);
        assert!(reminder.snoozed_until.is_some());

        // Snoozing an already hidden reminder does nothing
        assert!(manager.snooze(&id, Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn test_snooze_elapsed_reshows() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("later").unwrap();
        manager.handle_event(ReminderEvent::Created(store.path_of(&id)));
        manager.snooze(&id, Duration::from_secs(1));

        let actions = manager.snooze_elapsed(&id);
        assert_eq!(actions, vec![Action::Show(id.clone())]);
        let reminder = manager.get(&id).unwrap();
        assert!(reminder.visible);
        assert!(reminder.snoozed_until.is_none());
    }

    #[test]
    fn test_snooze_elapsed_after_dismiss_is_noop() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("later").unwrap();
        manager.handle_event(ReminderEvent::Created(store.path_of(&id)));
        manager.snooze(&id, Duration::from_secs(1));

        // File deleted while hidden
        manager.dismiss(&id).unwrap();
        manager.handle_event(ReminderEvent::Deleted(store.path_of(&id)));

        assert!(manager.snooze_elapsed(&id).is_empty());
    }

    #[test]
    fn test_dismiss_deletes_backing_file() {
        let (_tmp, store, mut manager) = setup();
        let id = store.add("done with this").unwrap();
        manager.handle_event(ReminderEvent::Created(store.path_of(&id)));

        manager.dismiss(&id).unwrap();
        assert!(!store.path_of(&id).exists());
        // Window bookkeeping only happens once the watcher reports it
        assert_eq!(manager.len(), 1);
    }
}
