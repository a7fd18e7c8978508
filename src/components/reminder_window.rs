//! One reminder, one window.
//!
//! Stateless beyond the displayed text: the body follows the watch
//! channel (so file edits update in place), and the two buttons post
//! messages back to the coordinator. Visibility is controlled entirely
//! from the host side.

use dioxus::prelude::*;
use remind_core::ReminderId;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;

use crate::host::UiMessage;
use crate::theme::REMINDER_STYLES;

#[derive(Props, Clone)]
pub struct ReminderWindowProps {
    /// The reminder this window is bound to.
    pub id: ReminderId,
    /// Live reminder text; follows the backing file.
    pub text: watch::Receiver<String>,
    /// Channel back to the coordinator loop.
    pub messages: UnboundedSender<UiMessage>,
}

// Each id has at most one window, so identity is enough here.
impl PartialEq for ReminderWindowProps {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[component]
pub fn ReminderWindow(props: ReminderWindowProps) -> Element {
    let mut text = use_signal(|| props.text.borrow().clone());

    // Follow file edits for as long as the window lives
    let text_rx = props.text.clone();
    use_future(move || {
        let mut rx = text_rx.clone();
        async move {
            while rx.changed().await.is_ok() {
                let updated = rx.borrow_and_update().clone();
                text.set(updated);
            }
        }
    });

    let snooze_id = props.id.clone();
    let snooze_tx = props.messages.clone();
    let dismiss_id = props.id.clone();
    let dismiss_tx = props.messages.clone();

    rsx! {
        style { {REMINDER_STYLES} }
        div { class: "reminder",
            p { class: "reminder-text", "{text}" }
            div { class: "reminder-actions",
                button {
                    class: "btn btn-done",
                    onclick: move |_| {
                        let _ = dismiss_tx.send(UiMessage::Dismiss(dismiss_id.clone()));
                    },
                    "Done"
                }
                button {
                    class: "btn btn-later",
                    onclick: move |_| {
                        let _ = snooze_tx.send(UiMessage::Snooze(snooze_id.clone()));
                    },
                    "Later"
                }
            }
        }
    }
}
