//! Filesystem watcher over the reminder directory.
//!
//! Wraps a `notify` recommended watcher and forwards `.rem` file events
//! into a tokio channel consumed by the coordinator loop. On startup the
//! existing file set is replayed as synthetic `Created` events so that
//! windows are restored after a restart.

use notify::event::{ModifyKind, RenameMode};
use notify::{recommended_watcher, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::UnboundedSender;

use crate::error::RemindError;
use crate::store::ReminderStore;
use crate::types::{ReminderEvent, ReminderId};

/// Running watch on the reminder directory. Dropping this stops the watch.
pub struct DirWatcher {
    _watcher: RecommendedWatcher,
}

impl DirWatcher {
    /// Start watching the store's directory and forward events to `tx`.
    ///
    /// Watching starts before the initial scan, so a file created in the
    /// gap shows up twice as `Created`; the manager treats a repeated
    /// create as a modification, so no duplicate window results.
    ///
    /// Any failure here (directory missing, backend error) is a fatal
    /// startup error for the caller.
    pub fn spawn(
        store: &ReminderStore,
        tx: UnboundedSender<ReminderEvent>,
    ) -> Result<Self, RemindError> {
        let event_tx = tx.clone();
        let mut watcher = recommended_watcher(move |result: notify::Result<Event>| match result {
            Ok(event) => {
                for reminder_event in translate(&event) {
                    let _ = event_tx.send(reminder_event);
                }
            }
            Err(e) => tracing::warn!("filesystem watch error: {}", e),
        })?;
        watcher.watch(store.dir(), RecursiveMode::NonRecursive)?;

        for id in store.list()? {
            let _ = tx.send(ReminderEvent::Created(store.path_of(&id)));
        }

        Ok(Self { _watcher: watcher })
    }
}

/// Map a raw notify event onto reminder events, dropping non-`.rem` paths.
///
/// Atomic-rename saves (editor write-to-temp-then-rename) surface as
/// rename events: the old name is a deletion, the new name a creation.
fn translate(event: &Event) -> Vec<ReminderEvent> {
    let mut out = Vec::new();

    if let EventKind::Modify(ModifyKind::Name(RenameMode::Both)) = event.kind {
        // paths = [from, to]
        if let Some(from) = event.paths.first() {
            if ReminderId::from_path(from).is_some() {
                out.push(ReminderEvent::Deleted(from.clone()));
            }
        }
        if let Some(to) = event.paths.get(1) {
            if ReminderId::from_path(to).is_some() {
                out.push(ReminderEvent::Created(to.clone()));
            }
        }
        return out;
    }

    for path in &event.paths {
        if ReminderId::from_path(path).is_none() {
            continue;
        }
        let mapped = match event.kind {
            EventKind::Create(_) => Some(ReminderEvent::Created(path.clone())),
            EventKind::Remove(_) => Some(ReminderEvent::Deleted(path.clone())),
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                Some(ReminderEvent::Deleted(path.clone()))
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
                Some(ReminderEvent::Created(path.clone()))
            }
            EventKind::Modify(_) => Some(ReminderEvent::Modified(path.clone())),
            _ => None,
        };
        if let Some(reminder_event) = mapped {
            out.push(reminder_event);
        }
    }
    out
}
