#![allow(non_snake_case)]

mod app;
mod components;
mod host;
mod theme;

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use remind_core::{InstanceLock, ReminderStore};

/// Default snooze duration for the "Later" button, in seconds.
const DEFAULT_SNOOZE_SECS: u64 = 540;

/// Runtime configuration resolved from the command line, set once before
/// the GUI launches.
static RUNTIME: OnceLock<RuntimeConfig> = OnceLock::new();

/// The single-instance lock, held for process lifetime and released
/// explicitly on the empty-set shutdown path.
static LOCK: Mutex<Option<InstanceLock>> = Mutex::new(None);

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory whose `.rem` entries are the reminder set.
    pub remind_dir: PathBuf,
    /// How long "Later" hides a window.
    pub snooze: Duration,
}

pub fn runtime_config() -> RuntimeConfig {
    RUNTIME.get().cloned().unwrap_or_else(|| RuntimeConfig {
        remind_dir: ReminderStore::default_dir(),
        snooze: Duration::from_secs(DEFAULT_SNOOZE_SECS),
    })
}

/// Drop the instance lock so its file is removed before the process exits.
pub fn release_instance_lock() {
    if let Ok(mut guard) = LOCK.lock() {
        guard.take();
    }
}

/// Remind Windows - display reminders as persistent windows
#[derive(Parser, Debug)]
#[command(name = "remindwindows-desktop")]
#[command(about = "Display reminders as persistent windows")]
struct Args {
    /// Directory holding .rem reminder files (default: ~/.remindwindows)
    #[arg(short, long)]
    remind_dir: Option<PathBuf>,

    /// Snooze duration in seconds for the "Later" button
    #[arg(short, long, default_value_t = DEFAULT_SNOOZE_SECS)]
    snooze_secs: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    // Fatal startup errors: reserved path is a file, or a second instance.
    let remind_dir = args.remind_dir.unwrap_or_else(ReminderStore::default_dir);
    let store = ReminderStore::open(&remind_dir)?;
    let lock = InstanceLock::acquire(InstanceLock::default_path())?;
    if let Ok(mut guard) = LOCK.lock() {
        *guard = Some(lock);
    }

    let _ = RUNTIME.set(RuntimeConfig {
        remind_dir: store.dir().to_path_buf(),
        snooze: Duration::from_secs(args.snooze_secs),
    });

    tracing::info!("watching {:?}", store.dir());

    // The root window is an invisible coordinator; every reminder opens
    // its own window from the event loop.
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("remindwindows")
            .with_visible(false),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
