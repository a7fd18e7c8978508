//! Window host: applies manager actions to real desktop windows.
//!
//! Owns the id → open-window map. Each reminder window is its own
//! VirtualDom in its own OS window; displayed text crosses over a watch
//! channel, button presses come back over the shared message channel.

use std::collections::HashMap;
use std::rc::Weak;

use dioxus::desktop::{
    Config, DesktopContext, DesktopService, LogicalPosition, LogicalSize, WindowBuilder,
};
use dioxus::prelude::*;
use remind_core::{Action, ReminderId};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;

use crate::components::{ReminderWindow, ReminderWindowProps};

/// Messages posted to the coordinator loop by reminder windows and
/// snooze timers.
#[derive(Clone, Debug)]
pub enum UiMessage {
    /// "Later" pressed: hide the window for the configured duration.
    Snooze(ReminderId),
    /// "Done" pressed: delete the backing file.
    Dismiss(ReminderId),
    /// A snooze timer fired: re-show the window.
    SnoozeElapsed(ReminderId),
}

struct OpenWindow {
    handle: Weak<DesktopService>,
    text: watch::Sender<String>,
}

pub struct WindowHost {
    desktop: DesktopContext,
    messages: UnboundedSender<UiMessage>,
    windows: HashMap<ReminderId, OpenWindow>,
    /// Windows opened so far, used to cascade new positions.
    opened: usize,
}

impl WindowHost {
    pub fn new(desktop: DesktopContext, messages: UnboundedSender<UiMessage>) -> Self {
        Self {
            desktop,
            messages,
            windows: HashMap::new(),
            opened: 0,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Open { id, text } => self.open(id, text),
            Action::SetText { id, text } => {
                if let Some(open) = self.windows.get(&id) {
                    let _ = open.text.send(text);
                }
            }
            Action::Hide(id) => self.set_visible(&id, false),
            Action::Show(id) => self.set_visible(&id, true),
            Action::Close(id) => {
                if let Some(open) = self.windows.remove(&id) {
                    if let Some(service) = open.handle.upgrade() {
                        service.close();
                    }
                }
            }
            Action::Shutdown => {
                tracing::info!("no reminder files remain, exiting");
                crate::release_instance_lock();
                std::process::exit(0);
            }
        }
    }

    fn open(&mut self, id: ReminderId, text: String) {
        if self.windows.contains_key(&id) {
            return;
        }

        let (text_tx, text_rx) = watch::channel(text);
        let dom = VirtualDom::new_with_props(
            ReminderWindow,
            ReminderWindowProps {
                id: id.clone(),
                text: text_rx,
                messages: self.messages.clone(),
            },
        );

        // Cascade so stacked reminders stay individually reachable
        let offset = 40.0 * (self.opened % 10) as f64;
        let config = Config::new().with_window(
            WindowBuilder::new()
                .with_title(id.as_str())
                .with_inner_size(LogicalSize::new(320.0, 180.0))
                .with_position(LogicalPosition::new(120.0 + offset, 120.0 + offset))
                .with_resizable(false),
        );

        let handle = self.desktop.new_window(dom, config);
        self.opened += 1;
        self.windows.insert(id, OpenWindow {
            handle,
            text: text_tx,
        });
    }

    fn set_visible(&self, id: &ReminderId, visible: bool) {
        if let Some(open) = self.windows.get(id) {
            if let Some(service) = open.handle.upgrade() {
                service.set_visible(visible);
            }
        }
    }
}
