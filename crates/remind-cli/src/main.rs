//! Remind Windows CLI
//!
//! Thin wrapper around remind-core for managing reminder files from the
//! command line. The desktop app watches the same directory, so every
//! change made here shows up as a window immediately.
//!
//! ## Usage
//!
//! ```bash
//! # Add a reminder (filename derived from the text)
//! remind add "Water the plants"
//!
//! # Add under an explicit name
//! remind add "Water the plants" -n plants
//!
//! # List reminders with their indices
//! remind list
//!
//! # Show a reminder by index, name, or filename
//! remind show 0
//! remind show plants
//!
//! # Delete a reminder (prompts unless -f)
//! remind delete plants -f
//!
//! # Edit a reminder in $EDITOR
//! remind edit plants
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use remind_core::ReminderStore;

/// Display reminders as persistent windows
#[derive(Parser)]
#[command(name = "remind")]
#[command(version = "0.1.0")]
#[command(about = "Manage file-backed reminders for Remind Windows")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reminder directory (default: ~/.remindwindows)
    #[arg(short, long, global = true)]
    remind_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new reminder
    Add {
        /// The text of the reminder
        text: String,
        /// Filename to use; ".rem" is appended if missing
        #[arg(short = 'n', long = "filename")]
        filename: Option<String>,
        /// Clobber an existing reminder with the same name
        #[arg(short, long)]
        force: bool,
    },

    /// List reminder files
    #[command(alias = "ls")]
    List,

    /// Show a reminder, by filename or index
    #[command(alias = "cat")]
    Show {
        /// Filename or index of the reminder
        file: String,
    },

    /// Delete a reminder file
    #[command(aliases = ["rm", "del"])]
    Delete {
        /// Filename or index of the reminder
        file: String,
        /// Do not prompt for deletion
        #[arg(short, long)]
        force: bool,
    },

    /// Edit an existing reminder in $EDITOR
    Edit {
        /// Filename or index of the reminder
        file: String,
    },
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

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let dir = cli.remind_dir.unwrap_or_else(ReminderStore::default_dir);
    let store = ReminderStore::open(&dir)?;

    match cli.command {
        Commands::Add {
            text,
            filename,
            force,
        } => {
            let id = match filename {
                Some(name) => store.add_named(&text, &name, force)?,
                None => store.add(&text)?,
            };
            println!("{}", id);
        }

        Commands::List => {
            for (index, id) in store.list()?.iter().enumerate() {
                println!("{:<3} {}", index, id);
            }
        }

        Commands::Show { file } => {
            let id = store.resolve(&file)?;
            print!("{}", store.read(&id)?);
        }

        Commands::Delete { file, force } => {
            let id = store.resolve(&file)?;
            if !force {
                print!("Delete {}? (Y/n): ", id);
                io::stdout().flush()?;
                let mut answer = String::new();
                io::stdin().lock().read_line(&mut answer)?;
                if !matches!(answer.trim(), "" | "y" | "Y") {
                    return Ok(());
                }
            }
            store.delete(&id)?;
            tracing::info!("deleted {}", id);
        }

        Commands::Edit { file } => {
            let id = store.resolve(&file)?;
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            let status = std::process::Command::new(&editor)
                .arg(store.path_of(&id))
                .status()?;
            if !status.success() {
                anyhow::bail!("{} exited with {}", editor, status);
            }
        }
    }

    Ok(())
}
