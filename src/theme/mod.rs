mod styles;

pub use styles::REMINDER_STYLES;
