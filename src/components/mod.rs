mod reminder_window;

pub use reminder_window::{ReminderWindow, ReminderWindowProps};
