//! Coordinator component: the hidden root window that runs the event loop.
//!
//! All application state lives here, on the GUI thread: watcher events
//! and window button presses arrive over channels and are dispatched
//! sequentially through the manager, whose resulting actions the
//! [`WindowHost`](crate::host::WindowHost) applies to real windows.

use dioxus::prelude::*;
use remind_core::{DirWatcher, ReminderManager, ReminderStore};
use tokio::sync::mpsc;

use crate::host::{UiMessage, WindowHost};
use crate::runtime_config;

/// Root component. Renders nothing visible; spawns the coordinator loop
/// once on mount.
#[component]
pub fn App() -> Element {
    let desktop = dioxus::desktop::use_window();

    use_effect(move || {
        let desktop = desktop.clone();
        spawn(async move {
            let config = runtime_config();

            let store = match ReminderStore::open(&config.remind_dir) {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!("failed to open reminder store: {}", e);
                    crate::release_instance_lock();
                    std::process::exit(1);
                }
            };

            let (event_tx, mut events) = mpsc::unbounded_channel();
            // Keep the watcher alive for the lifetime of the loop
            let _watcher = match DirWatcher::spawn(&store, event_tx) {
                Ok(watcher) => watcher,
                Err(e) => {
                    tracing::error!("failed to start directory watcher: {}", e);
                    crate::release_instance_lock();
                    std::process::exit(1);
                }
            };

            let (message_tx, mut messages) = mpsc::unbounded_channel::<UiMessage>();
            let mut manager = ReminderManager::new(store);
            let mut host = WindowHost::new(desktop, message_tx.clone());

            loop {
                tokio::select! {
                    Some(event) = events.recv() => {
                        for action in manager.handle_event(event) {
                            host.apply(action);
                        }
                    }
                    Some(message) = messages.recv() => match message {
                        UiMessage::Snooze(id) => {
                            for action in manager.snooze(&id, config.snooze) {
                                host.apply(action);
                            }
                            // Timer posts back into this loop; no blocking wait
                            let wake_tx = message_tx.clone();
                            let snooze = config.snooze;
                            tokio::spawn(async move {
                                tokio::time::sleep(snooze).await;
                                let _ = wake_tx.send(UiMessage::SnoozeElapsed(id));
                            });
                        }
                        UiMessage::SnoozeElapsed(id) => {
                            for action in manager.snooze_elapsed(&id) {
                                host.apply(action);
                            }
                        }
                        UiMessage::Dismiss(id) => {
                            // Only deletes the file; the watcher's deleted
                            // event closes the window
                            if let Err(e) = manager.dismiss(&id) {
                                tracing::warn!("failed to dismiss {}: {}", id, e);
                            }
                        }
                    },
                    else => break,
                }
            }
        });
    });

    rsx! {
        div {}
    }
}
