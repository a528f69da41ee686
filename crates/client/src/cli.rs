//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

/// CLI client for the hobbysync service.
#[derive(Debug, Parser)]
#[command(name = "hobbysync-client")]
#[command(about = "CLI client for the hobbysync service", long_about = None)]
pub struct Cli {
    /// Service base URL.
    #[arg(long, env = "HOBBYSYNC_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Path of the persisted cache file.
    #[arg(long, env = "HOBBYSYNC_CACHE", default_value = "hobbysync.json")]
    pub cache_path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered accounts.
    Accounts,
    /// Register a new account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and persist the session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and clear account-scoped data.
    Logout,
    /// Show the current session.
    Whoami,
    /// Hobby catalog management.
    Hobbies(HobbiesCommand),
    /// Schedule a hobby event.
    Schedule {
        /// Hobby catalog entry to schedule.
        #[arg(long)]
        hobby: Uuid,
        /// Event date as DD.MM.YYYY.
        #[arg(long)]
        date: String,
        /// Event time as HH:MM.
        #[arg(long)]
        time: String,
    },
    /// Show the calendar for the current account.
    Calendar {
        /// Selected day as DD.MM.YYYY (defaults to today).
        #[arg(long)]
        day: Option<String>,
    },
}

/// Hobby catalog commands.
#[derive(Debug, Args)]
pub struct HobbiesCommand {
    #[command(subcommand)]
    pub action: HobbiesAction,
}

/// Hobby catalog actions.
#[derive(Debug, Subcommand)]
pub enum HobbiesAction {
    /// List the shared hobby catalog.
    List,
    /// Add a hobby to the catalog.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: Option<String>,
        /// Difficulty rating from 1 to 5.
        #[arg(long)]
        difficulty: Option<u8>,
    },
}
