//! End-to-end lifecycle tests over a temp store: restart restoration,
//! window/file cardinality, snooze semantics and process shutdown.
//!
//! These drive the manager with explicit events, the same way the
//! coordinator loop does, so no display server or real watcher backend
//! is needed.

use std::time::Duration;

use remind_core::{Action, ReminderEvent, ReminderManager, ReminderStore};
use tempfile::TempDir;

fn open_store() -> (TempDir, ReminderStore) {
    let tmp = TempDir::new().unwrap();
    let store = ReminderStore::open(tmp.path().join("reminders")).unwrap();
    (tmp, store)
}

/// Replay the current file set as synthetic created events, as the
/// watcher does on startup.
fn replay_existing(store: &ReminderStore, manager: &mut ReminderManager) -> Vec<Action> {
    let mut actions = Vec::new();
    for id in store.list().unwrap() {
        actions.extend(manager.handle_event(ReminderEvent::Created(store.path_of(&id))));
    }
    actions
}

#[test]
fn restart_with_existing_files_restores_every_window() {
    let (_tmp, store) = open_store();
    let texts = ["water the plants", "call the dentist", "renew passport"];
    for text in texts {
        store.add(text).unwrap();
    }

    // "Restart": a fresh manager over the same directory
    let mut manager = ReminderManager::new(store.clone());
    let actions = replay_existing(&store, &mut manager);

    let mut opened: Vec<String> = actions
        .into_iter()
        .map(|action| match action {
            Action::Open { text, .. } => text,
            other => panic!("unexpected action on restart: {:?}", other),
        })
        .collect();
    opened.sort();

    let mut expected: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
    expected.sort();
    assert_eq!(opened, expected);
    assert_eq!(manager.len(), store.list().unwrap().len());
}

#[test]
fn window_count_tracks_readable_files() {
    let (_tmp, store) = open_store();
    let mut manager = ReminderManager::new(store.clone());

    for i in 0..5 {
        let id = store.add(&format!("reminder number {}", i)).unwrap();
        manager.handle_event(ReminderEvent::Created(store.path_of(&id)));
    }
    // One event for a path that was never written: no window
    manager.handle_event(ReminderEvent::Created(store.dir().join("phantom.rem")));

    assert_eq!(manager.len(), store.list().unwrap().len());
    assert_eq!(manager.len(), 5);
}

#[test]
fn external_and_user_deletion_both_close_the_window() {
    let (_tmp, store) = open_store();
    let mut manager = ReminderManager::new(store.clone());

    let external = store.add("externally removed").unwrap();
    let dismissed = store.add("user dismissed").unwrap();
    replay_existing(&store, &mut manager);

    // External deletion: someone rm'ed the file
    store.delete(&external).unwrap();
    let actions = manager.handle_event(ReminderEvent::Deleted(store.path_of(&external)));
    assert_eq!(actions, vec![Action::Close(external)]);

    // User dismissal: the button deletes the file, the watcher reports it
    manager.dismiss(&dismissed).unwrap();
    assert!(!store.path_of(&dismissed).exists());
    let actions = manager.handle_event(ReminderEvent::Deleted(store.path_of(&dismissed)));
    assert_eq!(actions, vec![Action::Close(dismissed), Action::Shutdown]);
}

#[test]
fn snooze_keeps_file_and_reshows_after_elapse() {
    let (_tmp, store) = open_store();
    let mut manager = ReminderManager::new(store.clone());
    let id = store.add("snooze me").unwrap();
    replay_existing(&store, &mut manager);

    let actions = manager.snooze(&id, Duration::from_secs(300));
    assert_eq!(actions, vec![Action::Hide(id.clone())]);
    assert!(store.path_of(&id).exists(), "snooze must not delete the file");

    // Timer fires
    let actions = manager.snooze_elapsed(&id);
    assert_eq!(actions, vec![Action::Show(id.clone())]);
    assert!(store.path_of(&id).exists());
}

#[test]
fn snoozed_file_still_counts_against_shutdown() {
    let (_tmp, store) = open_store();
    let mut manager = ReminderManager::new(store.clone());
    let snoozed = store.add("hidden but alive").unwrap();
    let other = store.add("visible").unwrap();
    replay_existing(&store, &mut manager);

    manager.snooze(&snoozed, Duration::from_secs(300));

    // Deleting the visible one must not exit: a snoozed file still exists
    store.delete(&other).unwrap();
    let actions = manager.handle_event(ReminderEvent::Deleted(store.path_of(&other)));
    assert_eq!(actions, vec![Action::Close(other)]);

    // Deleting the snoozed file empties the set
    store.delete(&snoozed).unwrap();
    let actions = manager.handle_event(ReminderEvent::Deleted(store.path_of(&snoozed)));
    assert_eq!(actions, vec![Action::Close(snoozed), Action::Shutdown]);
}

#[test]
fn modify_updates_text_without_reopening() {
    let (_tmp, store) = open_store();
    let mut manager = ReminderManager::new(store.clone());
    let id = store.add("draft text").unwrap();
    replay_existing(&store, &mut manager);

    std::fs::write(store.path_of(&id), "final text").unwrap();
    let actions = manager.handle_event(ReminderEvent::Modified(store.path_of(&id)));

    // In-place update: no Close, no Open
    assert_eq!(
        actions,
        vec![Action::SetText {
            id: id.clone(),
            text: "final text".into()
        }]
    );
    assert_eq!(manager.len(), 1);
}

#[test]
fn rapid_create_modify_takes_most_recent_content() {
    let (_tmp, store) = open_store();
    let mut manager = ReminderManager::new(store.clone());

    let id = store.add("v1").unwrap();
    let path = store.path_of(&id);
    // Content changed before the create event is processed
    std::fs::write(&path, "v2").unwrap();

    let actions = manager.handle_event(ReminderEvent::Created(path.clone()));
    assert_eq!(
        actions,
        vec![Action::Open {
            id: id.clone(),
            text: "v2".into()
        }]
    );

    // The trailing modify event for the same write is a harmless refresh
    let actions = manager.handle_event(ReminderEvent::Modified(path));
    assert_eq!(actions, vec![Action::SetText { id, text: "v2".into() }]);
}
